use std::ops::{Add, Div, Mul, Neg, Sub};

/// Generate a trait impl for an operation involving two [Vec2D]s, like [Add] or [Sub]
macro_rules! impl_bin_op {
    ($trait: ident, $fn: ident, $op: tt) => {
        impl<T: $trait<T, Output = T>> $trait for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: Self) -> Self::Output {
                Self {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }
    };
}

/// Generate a trait impl for an operation involving a [Vec2D] and a scalar value of unknown type
macro_rules! impl_scalar_op {
    ($trait: ident, $fn: ident, $op: tt, $rhs: ident) => {
        impl<T: $trait<$rhs, Output = T>> $trait<$rhs> for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: $rhs) -> Self::Output {
                Self {
                    x: self.x $op rhs,
                    y: self.y $op rhs,
                }
            }
        }
    };
}

/// A point in the plane, or a vector between two points.
///
/// Nothing in the type says which of the two a value is. Tessellation code
/// uses the same type for positions, unit directions and unit normals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2D<T = f32> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2D<T> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    #[must_use]
    pub fn map<U, F: Fn(T) -> U>(self, f: F) -> Vec2D<U> {
        Vec2D {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl Vec2D<f32> {
    pub const ORIGIN: Self = Self::new(0., 0.);

    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.magnitude() < f32::EPSILON
    }

    #[inline]
    #[must_use]
    pub fn lerp(&self, other: Self, t: f32) -> Self {
        debug_assert!(0. <= t);
        debug_assert!(t <= 1.);

        Self {
            x: (other.x - self.x).mul_add(t, self.x),
            y: (other.y - self.y).mul_add(t, self.y),
        }
    }

    /// Scale the vector to length `1`.
    ///
    /// The zero vector has no direction and is returned unchanged.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude < f32::EPSILON {
            return *self;
        }

        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
        }
    }

    /// Rotate the vector by 90 degrees, `(x, y)` becomes `(-y, x)`.
    ///
    /// For a segment direction this yields its clockwise normal in a
    /// y-down coordinate system.
    #[inline]
    #[must_use]
    pub fn perpendicular(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f32 {
        (*self - other).magnitude()
    }

    // Compute the dot product of two vectors
    #[inline]
    #[must_use]
    pub fn dot(&self, other: Self) -> f32 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    // Compute the cross product of two vectors
    #[inline]
    #[must_use]
    pub fn cross_product(&self, other: Self) -> f32 {
        self.x.mul_add(other.y, -self.y * other.x)
    }

    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Return `true` if both components differ by less than `tolerance`
    #[inline]
    #[must_use]
    pub fn approx_eq(&self, other: Self, tolerance: f32) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

impl<T: Neg<Output = T>> Neg for Vec2D<T> {
    type Output = Self;

    #[must_use]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl_bin_op!(Add, add, +);
impl_bin_op!(Sub, sub, -);

impl_scalar_op!(Mul, mul, *, f32);
impl_scalar_op!(Mul, mul, *, i32);
impl_scalar_op!(Mul, mul, *, usize);

impl_scalar_op!(Div, div, /, f32);
impl_scalar_op!(Div, div, /, i32);
impl_scalar_op!(Div, div, /, usize);

#[cfg(test)]
mod tests {
    use super::Vec2D;

    #[test]
    fn magnitude() {
        let vec = Vec2D::new(1., 1.);
        assert_eq!(vec.magnitude(), std::f32::consts::SQRT_2);
    }

    #[test]
    fn unit() {
        let unit = Vec2D::new(3., 4.).unit();
        assert!(unit.approx_eq(Vec2D::new(0.6, 0.8), 1e-6));
        assert!((unit.magnitude() - 1.).abs() < 1e-6);

        // The origin has no direction
        assert_eq!(Vec2D::ORIGIN.unit(), Vec2D::ORIGIN);
    }

    #[test]
    fn perpendicular() {
        let direction = Vec2D::new(1., 0.);
        assert_eq!(direction.perpendicular(), Vec2D::new(0., 1.));
        assert_eq!(direction.perpendicular().dot(direction), 0.);

        // Four quarter turns are the identity
        let v = Vec2D::new(2., -3.);
        assert_eq!(
            v.perpendicular()
                .perpendicular()
                .perpendicular()
                .perpendicular(),
            v
        );
    }

    #[test]
    fn distance() {
        assert_eq!(Vec2D::new(1., 1.).distance_to(Vec2D::new(4., 5.)), 5.);
    }

    #[test]
    fn vec2d_add() {
        assert_eq!(Vec2D::new(1., 0.) + Vec2D::new(1., 1.), Vec2D::new(2., 1.));
        assert_eq!(Vec2D::new(-2, 1) + Vec2D::new(1, 0), Vec2D::new(-1, 1));
    }

    #[test]
    fn vec2d_sub() {
        assert_eq!(Vec2D::new(1., 0.) - Vec2D::new(1., 1.), Vec2D::new(0., -1.));
        assert_eq!(Vec2D::new(-2, 1) - Vec2D::new(1, 0), Vec2D::new(-3, 1));
    }

    #[test]
    fn vec2d_mul() {
        assert_eq!(Vec2D::new(1., -1.) * 2., Vec2D::new(2., -2.));
        assert_eq!(Vec2D::new(1, -1) * 2, Vec2D::new(2, -2));
    }

    #[test]
    fn vec2d_neg() {
        assert_eq!(-Vec2D::new(1., -2.), Vec2D::new(-1., 2.));
    }
}
