use math::Vec2D;

use crate::{Arc, Mesh, Quadrant, RadialVertex, StrokeError, StrokeStyle};

/// Emit the right triangle pair covering one quadrant around `center`.
///
/// The legs are `radius + width` long, which is more than enough to contain
/// the stroked ring `[radius - width / 2, radius + width / 2]`.
fn push_quadrant(
    center: Vec2D,
    radius: f32,
    width: f32,
    quadrant: Quadrant,
    mesh: &mut Mesh<RadialVertex>,
) {
    let (horizontal, vertical) = quadrant.span(radius + width);

    let vertex = |position| RadialVertex { position };
    mesh.push_quad(
        vertex(center),
        vertex(center + horizontal),
        vertex(center + horizontal + vertical),
        vertex(center + vertical),
    );
}

/// Tessellate the upper right quadrant of a circular stroke.
///
/// The triangles cover a square, the ring itself is cut out by the
/// radial coverage function.
pub fn tessellate_arc_quad(
    center: Vec2D,
    radius: f32,
    style: &StrokeStyle,
) -> Result<Mesh<RadialVertex>, StrokeError> {
    style.validate()?;

    let mut mesh = Mesh::with_capacity(2);
    push_quadrant(center, radius, style.width, Quadrant::UpperRight, &mut mesh);
    Ok(mesh)
}

/// Tessellate every quadrant an arc spans, two triangles each
pub fn tessellate_arc(arc: &Arc, style: &StrokeStyle) -> Result<Mesh<RadialVertex>, StrokeError> {
    style.validate()?;

    let mut mesh = Mesh::with_capacity(8);
    for quadrant in arc.quadrants() {
        push_quadrant(arc.center, arc.radius, style.width, quadrant, &mut mesh);
    }

    log::debug!(
        "Tessellated arc around {:?} (radius {}) into {} triangles",
        arc.center,
        arc.radius,
        mesh.len()
    );
    Ok(mesh)
}

pub fn tessellate_circle(
    center: Vec2D,
    radius: f32,
    style: &StrokeStyle,
) -> Result<Mesh<RadialVertex>, StrokeError> {
    tessellate_arc(&Arc::circle(center, radius), style)
}

#[cfg(test)]
mod tests {
    use math::Vec2D;

    use super::{tessellate_arc, tessellate_arc_quad, tessellate_circle};
    use crate::{Arc, Quadrant, StrokeStyle};

    #[test]
    fn single_quadrant() {
        let center = Vec2D::new(100., 75.);
        let mesh = tessellate_arc_quad(center, 50., &StrokeStyle::new(20.)).unwrap();

        assert_eq!(mesh.len(), 2);
        let positions: Vec<_> = mesh.vertices().map(|vertex| vertex.position).collect();
        assert_eq!(
            positions,
            [
                Vec2D::new(100., 75.),
                Vec2D::new(170., 75.),
                Vec2D::new(170., 5.),
                Vec2D::new(100., 75.),
                Vec2D::new(170., 5.),
                Vec2D::new(100., 5.),
            ]
        );
        assert_eq!(mesh.area(), 70. * 70.);
    }

    #[test]
    fn quadrant_contains_ring() {
        let center = Vec2D::new(0., 0.);
        let mesh = tessellate_arc_quad(center, 50., &StrokeStyle::new(20.)).unwrap();
        let extent = mesh.bounding_box().unwrap();

        // Outer edge of the ring plus the antialiasing band
        assert!(extent.width() >= 50. + 10. + 0.5);
        assert!(extent.height() >= 50. + 10. + 0.5);
    }

    #[test]
    fn circle_covers_every_quadrant() {
        let mesh = tessellate_circle(Vec2D::new(0., 0.), 10., &StrokeStyle::new(2.)).unwrap();

        assert_eq!(mesh.len(), 8);
        let extent = mesh.bounding_box().unwrap();
        assert_eq!(extent.top_left(), Vec2D::new(-12., -12.));
        assert_eq!(extent.bottom_right(), Vec2D::new(12., 12.));
        assert_eq!(mesh.area(), 24. * 24.);
    }

    #[test]
    fn partial_arc() {
        let arc = Arc::new(Vec2D::new(0., 0.), 10., Quadrant::LowerLeft, 2).unwrap();
        let mesh = tessellate_arc(&arc, &StrokeStyle::new(2.)).unwrap();

        assert_eq!(mesh.len(), 4);
        let extent = mesh.bounding_box().unwrap();
        assert_eq!(extent.top_left(), Vec2D::new(-12., -12.));
        assert_eq!(extent.bottom_right(), Vec2D::new(0., 12.));
    }

    #[test]
    fn rejects_bad_width() {
        assert!(tessellate_arc_quad(Vec2D::new(0., 0.), 10., &StrokeStyle::new(0.)).is_err());
    }
}
