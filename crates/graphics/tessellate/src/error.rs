use error_derive::Error;

/// Reasons why a path cannot be turned into a stroke mesh.
///
/// All of these are detected before any geometry is emitted, so a failed
/// tessellation never produces a partial [Mesh](crate::Mesh).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum StrokeError {
    #[msg = "path has {points} points, but at least {required} are required"]
    InvalidPath { points: usize, required: usize },

    #[msg = "arc spans {quadrants} quadrants, expected between 1 and 4"]
    InvalidArcSpan { quadrants: usize },

    #[msg = "segment {index} has zero length"]
    ZeroLengthSegment { index: usize },

    #[msg = "stroke width must be positive, got {width}"]
    InvalidStrokeWidth { width: f32 },

    #[msg = "miter limit must be at least 1, got {miter_limit}"]
    InvalidMiterLimit { miter_limit: f32 },

    #[msg = "miter join at point {index} is degenerate (cos(half angle) = {cos_half_angle})"]
    DegenerateJoin { index: usize, cos_half_angle: f32 },
}
