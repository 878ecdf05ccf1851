use math::{AffineTransform, Color, Vec2D};

/// Per-draw state shared by every vertex and fragment of a draw call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    pub width: usize,
    pub height: usize,

    /// Maps path coordinates (origin in the top left, y pointing down) to
    /// window coordinates (origin in the bottom left, y pointing up)
    pub projection: AffineTransform,

    pub line_width: f32,

    /// Center of the circle drawn by radial shaders, in path coordinates
    pub center: Vec2D,

    pub radius: f32,
    pub clear_color: Color,
}

impl RenderContext {
    pub const DEFAULT_CLEAR_COLOR: Color = Color::rgb(0.9, 0.9, 0.9);

    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            // Orthographic projection onto (0, width, height, 0) followed by
            // the viewport transform
            projection: AffineTransform::scale(1., -1.)
                .chain(AffineTransform::translate(Vec2D::new(0., height as f32))),
            line_width: 1.,
            center: Vec2D::ORIGIN,
            radius: 0.,
            clear_color: Self::DEFAULT_CLEAR_COLOR,
        }
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_circle(mut self, center: Vec2D, radius: f32) -> Self {
        self.center = center;
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_clear_color(mut self, clear_color: Color) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Map a point from path coordinates to window coordinates
    #[inline]
    #[must_use]
    pub fn to_window(&self, point: Vec2D) -> Vec2D {
        self.projection.apply_to(point)
    }

    /// The circle's center in window coordinates, which is the space
    /// fragment coordinates live in
    #[inline]
    #[must_use]
    pub fn frag_coord_center(&self) -> Vec2D {
        self.to_window(self.center)
    }
}

#[cfg(test)]
mod tests {
    use math::Vec2D;

    use super::RenderContext;

    #[test]
    fn projection_flips_y() {
        let context = RenderContext::new(200, 150);

        assert_eq!(context.to_window(Vec2D::new(0., 0.)), Vec2D::new(0., 150.));
        assert_eq!(context.to_window(Vec2D::new(200., 150.)), Vec2D::new(200., 0.));
    }

    #[test]
    fn center_is_flipped() {
        let context = RenderContext::new(200, 150).with_circle(Vec2D::new(100., 75.), 50.);
        assert_eq!(context.frag_coord_center(), Vec2D::new(100., 75.));

        let context = context.with_circle(Vec2D::new(100., 20.), 50.);
        assert_eq!(context.frag_coord_center(), Vec2D::new(100., 130.));
    }
}
