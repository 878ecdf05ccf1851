use math::{Color, Vec2D};
use tessellate::{
    tessellate_arc, tessellate_polyline, tessellate_straight_segment, Arc, Mesh, Polyline,
    StrokeError, StrokeStyle,
};

use crate::{
    coverage::RadialFeather,
    shader::{RadialStrokeShader, SeamStrokeShader, SegmentStrokeShader, Shader},
    RenderContext,
};

/// Something that turns meshes into pixels
pub trait Renderer {
    type Error;

    /// Fill the whole target with `color`
    fn clear(&mut self, color: Color);

    /// Rasterize every triangle in `mesh` and blend the shaded pixels into the target
    fn draw<S: Shader>(
        &mut self,
        shader: &S,
        mesh: &Mesh<S::Vertex>,
        context: &RenderContext,
    ) -> Result<(), Self::Error>;
}

/// Stroke a single straight segment.
///
/// The segment is tessellated with `style`, which also determines the line
/// width the coverage stage sees.
pub fn draw_segment<R>(
    renderer: &mut R,
    start: Vec2D,
    end: Vec2D,
    style: &StrokeStyle,
    context: &RenderContext,
) -> Result<(), R::Error>
where
    R: Renderer,
    R::Error: From<StrokeError>,
{
    let mesh = tessellate_straight_segment(start, end, style)?;
    let shader = SegmentStrokeShader {
        extrusion: style.extrusion,
    };
    renderer.draw(&shader, &mesh, &context.with_line_width(style.width))
}

/// Stroke a polyline, mitering the joins between its segments
pub fn draw_polyline<R>(
    renderer: &mut R,
    polyline: &Polyline,
    style: &StrokeStyle,
    seam_correction: bool,
    context: &RenderContext,
) -> Result<(), R::Error>
where
    R: Renderer,
    R::Error: From<StrokeError>,
{
    let mesh = tessellate_polyline(polyline, style)?;

    // Joins are always extruded during tessellation
    let extrusion = if polyline.num_segments() == 1 {
        style.extrusion
    } else {
        Default::default()
    };
    let shader = SeamStrokeShader {
        extrusion,
        seam_correction,
    };
    renderer.draw(&shader, &mesh, &context.with_line_width(style.width))
}

/// Stroke a circular arc
pub fn draw_arc<R>(
    renderer: &mut R,
    arc: &Arc,
    style: &StrokeStyle,
    feather: RadialFeather,
    context: &RenderContext,
) -> Result<(), R::Error>
where
    R: Renderer,
    R::Error: From<StrokeError>,
{
    let mesh = tessellate_arc(arc, style)?;
    let context = context
        .with_line_width(style.width)
        .with_circle(arc.center, arc.radius);
    renderer.draw(&RadialStrokeShader { feather }, &mesh, &context)
}
