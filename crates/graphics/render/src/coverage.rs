//! Per-pixel coverage of antialiased strokes
//!
//! Every function in here maps interpolated per-pixel data to an alpha value in
//! `[0, 1]`. None of them look at neighbouring pixels, so they can be
//! evaluated in any order.

use math::{Color, Vec2D};

/// Strokes are always drawn in black, coverage only controls the alpha channel
pub const STROKE_COLOR: Color = Color::BLACK;

/// Width of the band over which segment coverage fades out, on each side
pub const SEGMENT_FEATHER: f32 = 1.;

/// How circular strokes fade out at their edges
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadialFeather {
    /// Fade out over one pixel centered on the geometric edge.
    ///
    /// Pixels exactly on the edge get half coverage, pixels half a pixel
    /// outside get none.
    #[default]
    Reference,

    /// Fade out over the last pixel inside the geometric edge, so that pixels
    /// exactly on the edge are fully transparent.
    Inset,
}

/// Coverage of a pixel at `frag_coord` by a ring around `center`.
///
/// `frag_coord` and `center` must live in the same pixel space.
#[must_use]
pub fn radial_coverage(
    frag_coord: Vec2D,
    center: Vec2D,
    radius: f32,
    line_width: f32,
    feather: RadialFeather,
) -> f32 {
    let distance_from_ring = (frag_coord.distance_to(center) - radius).abs();
    radial_coverage_at(distance_from_ring, line_width, feather)
}

/// Coverage of a pixel that is `distance_from_ring` away from the circle
/// the ring is centered on.
#[must_use]
pub fn radial_coverage_at(distance_from_ring: f32, line_width: f32, feather: RadialFeather) -> f32 {
    match feather {
        RadialFeather::Reference => {
            let half_line_width = line_width / 2. + 0.5;
            if distance_from_ring < half_line_width {
                (distance_from_ring - half_line_width).abs().clamp(0., 1.)
            } else {
                0.
            }
        },
        RadialFeather::Inset => (line_width / 2. - distance_from_ring).clamp(0., 1.),
    }
}

/// Coverage of a pixel inside a straight segment.
///
/// `normal_length` is the length of the interpolated vertex normal. It is `0`
/// on the centerline and `1` on the vertices' edge.
#[must_use]
pub fn segment_coverage(normal_length: f32, line_width: f32) -> f32 {
    let line_width = line_width + 0.5;
    let distance = normal_length * line_width;

    if distance < line_width - 2. * SEGMENT_FEATHER {
        1.
    } else {
        ((line_width - distance) / SEGMENT_FEATHER / 2.).clamp(0., 1.)
    }
}

/// Override the coverage close to a segment's endpoints.
///
/// The interpolated direction only has unit length near the start or end of
/// a segment. There, the alpha is replaced by a fixed value that hides the
/// seam between two joined segments. This is a visual patch and has no
/// geometric meaning.
#[must_use]
pub fn seam_correction(direction_length: f32, alpha: f32) -> f32 {
    let deviation = (direction_length - 1.).abs();
    if deviation < 0.01 {
        deviation * 10. + 0.2
    } else {
        alpha
    }
}
