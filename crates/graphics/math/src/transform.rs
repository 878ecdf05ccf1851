use super::Vec2D;

/// A 2-dimensional transformation.
///
/// Each [AffineTransform] is a `3x3` matrix that transforms a 2 dimensional vector `x`, `y`.
/// The last row is always `0 0 1` and is therefore not stored.
/// See [Wikipedia](https://en.wikipedia.org/wiki/Affine_transformation) for more information.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform([[f32; 3]; 2]);

impl AffineTransform {
    #[inline]
    pub const fn identity() -> Self {
        Self([[1., 0., 0.], [0., 1., 0.]])
    }

    /// Create transformation that shifts every point by a fixed offset
    #[inline]
    pub const fn translate(translate_by: Vec2D) -> Self {
        Self([[1., 0., translate_by.x], [0., 1., translate_by.y]])
    }

    /// Create a transformation that scales points by fixed values along the X and Y axis
    #[inline]
    pub const fn scale(x_scale: f32, y_scale: f32) -> Self {
        Self([[x_scale, 0., 0.], [0., y_scale, 0.]])
    }

    /// Apply this transform to a provided vector
    #[inline]
    pub fn apply_to(self, point: Vec2D) -> Vec2D {
        Vec2D {
            x: point
                .x
                .mul_add(self.0[0][0], point.y.mul_add(self.0[0][1], self.0[0][2])),
            y: point
                .x
                .mul_add(self.0[1][0], point.y.mul_add(self.0[1][1], self.0[1][2])),
        }
    }

    /// Combine two transforms together into a single one
    ///
    /// The resulting transform applies `self` first and `other` second.
    #[inline]
    pub fn chain(&self, other: Self) -> Self {
        // Multiply the two matrices together
        // a b c
        // d e f
        // 0 0 1
        let a = other.0[0][0].mul_add(self.0[0][0], other.0[0][1] * self.0[1][0]);
        let b = other.0[0][0].mul_add(self.0[0][1], other.0[0][1] * self.0[1][1]);
        let c = other.0[0][0].mul_add(
            self.0[0][2],
            other.0[0][1].mul_add(self.0[1][2], other.0[0][2]),
        );

        let d = other.0[1][0].mul_add(self.0[0][0], other.0[1][1] * self.0[1][0]);
        let e = other.0[1][0].mul_add(self.0[0][1], other.0[1][1] * self.0[1][1]);
        let f = other.0[1][0].mul_add(
            self.0[0][2],
            other.0[1][1].mul_add(self.0[1][2], other.0[1][2]),
        );

        Self([[a, b, c], [d, e, f]])
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::AffineTransform;
    use crate::Vec2D;

    #[test]
    fn identity() {
        let point = Vec2D::new(2., 3.);
        assert_eq!(AffineTransform::identity().apply_to(point), point);
    }

    #[test]
    fn chain_applies_left_to_right() {
        let translate = AffineTransform::translate(Vec2D::new(1., 2.));
        let scale = AffineTransform::scale(2., 3.);
        let chained = translate.chain(scale);
        assert_eq!(chained.apply_to(Vec2D::new(-2., 2.)), Vec2D::new(-2., 12.));
    }

    #[test]
    fn flip_vertical() {
        // Mirror along the x axis, then move the origin to the bottom edge
        let flip = AffineTransform::scale(1., -1.)
            .chain(AffineTransform::translate(Vec2D::new(0., 150.)));

        assert_eq!(flip.apply_to(Vec2D::new(100., 75.)), Vec2D::new(100., 75.));
        assert_eq!(flip.apply_to(Vec2D::new(10., 10.)), Vec2D::new(10., 140.));
        assert_eq!(flip.apply_to(Vec2D::new(0., 150.)), Vec2D::new(0., 0.));
    }
}
