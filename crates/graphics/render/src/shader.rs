//! Programs that bind the coverage functions to the vertex kinds produced by
//! the tessellator
//!
//! A [Shader] runs in two stages. The vertex stage maps every vertex into
//! window coordinates and produces a [Varying], which the rasterizer
//! interpolates across the triangle. The fragment stage turns the interpolated
//! varying of a single pixel into a color.

use math::{Color, Vec2D};
use tessellate::{Extrusion, RadialVertex, SeamVertex, SegmentVertex, Vertex};

use crate::{
    coverage::{self, RadialFeather, STROKE_COLOR},
    RenderContext,
};

/// Per-vertex output that is interpolated across a triangle
pub trait Varying: Copy {
    /// Combine three values using barycentric `weights` that sum up to `1`
    fn interpolate(values: [Self; 3], weights: [f32; 3]) -> Self;
}

impl Varying for () {
    fn interpolate(_values: [Self; 3], _weights: [f32; 3]) -> Self {}
}

impl Varying for f32 {
    fn interpolate(values: [Self; 3], weights: [f32; 3]) -> Self {
        values[0].mul_add(
            weights[0],
            values[1].mul_add(weights[1], values[2] * weights[2]),
        )
    }
}

impl Varying for Vec2D {
    fn interpolate(values: [Self; 3], weights: [f32; 3]) -> Self {
        Vec2D::new(
            f32::interpolate(values.map(|value| value.x), weights),
            f32::interpolate(values.map(|value| value.y), weights),
        )
    }
}

impl<A: Varying, B: Varying> Varying for (A, B) {
    fn interpolate(values: [Self; 3], weights: [f32; 3]) -> Self {
        (
            A::interpolate(values.map(|value| value.0), weights),
            B::interpolate(values.map(|value| value.1), weights),
        )
    }
}

pub trait Shader {
    type Vertex: Vertex;
    type Varying: Varying;

    /// Map a vertex to window coordinates
    fn vertex(&self, vertex: &Self::Vertex, context: &RenderContext) -> (Vec2D, Self::Varying);

    /// Compute the color of the pixel centered at `frag_coord` (in window coordinates)
    fn fragment(&self, frag_coord: Vec2D, varying: &Self::Varying, context: &RenderContext)
        -> Color;
}

/// Offset of a vertex that still sits on the centerline
fn deferred_offset(normal: Vec2D, extrusion: Extrusion, context: &RenderContext) -> Vec2D {
    match extrusion {
        Extrusion::Geometric => Vec2D::ORIGIN,
        // One extra pixel leaves room for the antialiasing band
        Extrusion::Deferred => normal * ((context.line_width + 1.) / 2.),
    }
}

/// Draws rings, see [radial_coverage](coverage::radial_coverage)
#[derive(Clone, Copy, Debug, Default)]
pub struct RadialStrokeShader {
    pub feather: RadialFeather,
}

impl Shader for RadialStrokeShader {
    type Vertex = RadialVertex;
    type Varying = ();

    fn vertex(&self, vertex: &Self::Vertex, context: &RenderContext) -> (Vec2D, Self::Varying) {
        (context.to_window(vertex.position), ())
    }

    fn fragment(&self, frag_coord: Vec2D, _varying: &(), context: &RenderContext) -> Color {
        let alpha = coverage::radial_coverage(
            frag_coord,
            context.frag_coord_center(),
            context.radius,
            context.line_width,
            self.feather,
        );
        STROKE_COLOR.with_alpha(alpha)
    }
}

/// Draws straight segments, see [segment_coverage](coverage::segment_coverage)
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentStrokeShader {
    /// Must match the extrusion the mesh was tessellated with
    pub extrusion: Extrusion,
}

impl Shader for SegmentStrokeShader {
    type Vertex = SegmentVertex;

    /// The vertex normal
    type Varying = Vec2D;

    fn vertex(&self, vertex: &Self::Vertex, context: &RenderContext) -> (Vec2D, Self::Varying) {
        let position =
            vertex.position + deferred_offset(vertex.normal, self.extrusion, context);
        (context.to_window(position), vertex.normal)
    }

    fn fragment(&self, _frag_coord: Vec2D, normal: &Vec2D, context: &RenderContext) -> Color {
        let alpha = coverage::segment_coverage(normal.magnitude(), context.line_width);
        STROKE_COLOR.with_alpha(alpha)
    }
}

/// Draws joined segments and optionally hides the seams between them
#[derive(Clone, Copy, Debug, Default)]
pub struct SeamStrokeShader {
    pub extrusion: Extrusion,
    pub seam_correction: bool,
}

impl Shader for SeamStrokeShader {
    type Vertex = SeamVertex;

    /// The vertex normal and direction
    type Varying = (Vec2D, Vec2D);

    fn vertex(&self, vertex: &Self::Vertex, context: &RenderContext) -> (Vec2D, Self::Varying) {
        let position =
            vertex.position + deferred_offset(vertex.normal, self.extrusion, context);
        (
            context.to_window(position),
            (vertex.normal, vertex.direction),
        )
    }

    fn fragment(
        &self,
        _frag_coord: Vec2D,
        (normal, direction): &(Vec2D, Vec2D),
        context: &RenderContext,
    ) -> Color {
        let mut alpha = coverage::segment_coverage(normal.magnitude(), context.line_width);
        if self.seam_correction {
            alpha = coverage::seam_correction(direction.magnitude(), alpha);
        }
        STROKE_COLOR.with_alpha(alpha)
    }
}

#[cfg(test)]
mod tests {
    use math::Vec2D;
    use tessellate::{Extrusion, RadialVertex, SeamVertex, SegmentVertex};

    use super::{RadialStrokeShader, SeamStrokeShader, SegmentStrokeShader, Shader, Varying};
    use crate::RenderContext;

    #[test]
    fn interpolate_vectors() {
        let values = [Vec2D::new(0., 0.), Vec2D::new(4., 0.), Vec2D::new(0., 8.)];

        assert_eq!(Vec2D::interpolate(values, [1., 0., 0.]), values[0]);
        assert_eq!(
            Vec2D::interpolate(values, [0., 0.5, 0.5]),
            Vec2D::new(2., 4.)
        );
    }

    #[test]
    fn radial_fragment_uses_window_center() {
        let context = RenderContext::new(200, 150)
            .with_line_width(20.)
            .with_circle(Vec2D::new(100., 20.), 50.);
        let shader = RadialStrokeShader::default();

        // 50 pixels above the center in path coordinates means 50 pixels
        // *further up* the window, so the y coordinate grows
        let (position, ()) = shader.vertex(
            &RadialVertex {
                position: Vec2D::new(100., 20.),
            },
            &context,
        );
        assert_eq!(position, Vec2D::new(100., 130.));

        let on_ring = shader.fragment(Vec2D::new(100., 180.), &(), &context);
        assert_eq!(on_ring.alpha(), 1.);

        let far_away = shader.fragment(Vec2D::new(100., 20.), &(), &context);
        assert_eq!(far_away.alpha(), 0.);
    }

    #[test]
    fn deferred_extrusion_pads_by_half_a_pixel() {
        let context = RenderContext::new(100, 100).with_line_width(4.);
        let vertex = SegmentVertex {
            position: Vec2D::new(10., 10.),
            normal: Vec2D::new(0., 1.),
        };

        let geometric = SegmentStrokeShader::default();
        let (position, _) = geometric.vertex(&vertex, &context);
        assert_eq!(position, Vec2D::new(10., 90.));

        let deferred = SegmentStrokeShader {
            extrusion: Extrusion::Deferred,
        };
        let (position, normal) = deferred.vertex(&vertex, &context);
        assert_eq!(position, Vec2D::new(10., 87.5));
        assert_eq!(normal, vertex.normal);
    }

    #[test]
    fn segment_fragment() {
        let context = RenderContext::new(100, 100).with_line_width(4.);
        let shader = SegmentStrokeShader::default();

        let center = shader.fragment(Vec2D::ORIGIN, &Vec2D::ORIGIN, &context);
        assert_eq!(center.alpha(), 1.);
        assert_eq!(center.red(), 0.);

        let edge = shader.fragment(Vec2D::ORIGIN, &Vec2D::new(1., 0.), &context);
        assert_eq!(edge.alpha(), 0.);
    }

    #[test]
    fn seam_correction_is_optional() {
        let context = RenderContext::new(100, 100).with_line_width(4.);
        let vertex = SeamVertex {
            position: Vec2D::new(0., 0.),
            normal: Vec2D::new(0., 1.),
            direction: Vec2D::new(1., 0.),
        };
        let varying = (Vec2D::ORIGIN, vertex.direction);

        let plain = SeamStrokeShader::default();
        assert_eq!(plain.fragment(Vec2D::ORIGIN, &varying, &context).alpha(), 1.);

        let corrected = SeamStrokeShader {
            seam_correction: true,
            ..Default::default()
        };
        let alpha = corrected.fragment(Vec2D::ORIGIN, &varying, &context).alpha();
        assert!((alpha - 0.2).abs() < 1e-6);
    }
}
