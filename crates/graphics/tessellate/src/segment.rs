use math::Vec2D;

use crate::{Extrusion, Mesh, StrokeError, StrokeStyle, StrokeVertex};

/// Direction and normal of a single straight segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SegmentFrame {
    pub start: Vec2D,
    pub end: Vec2D,

    /// Unit vector from `start` to `end`
    pub direction: Vec2D,

    /// Clockwise unit normal, the counter-clockwise normal is its negation
    pub normal: Vec2D,
}

impl SegmentFrame {
    /// Fails if the segment has no direction, `index` is reported as the
    /// offending segment
    pub(crate) fn new(index: usize, start: Vec2D, end: Vec2D) -> Result<Self, StrokeError> {
        let direction = (end - start).unit();

        if direction.is_origin() {
            return Err(StrokeError::ZeroLengthSegment { index });
        }

        Ok(Self {
            start,
            end,
            direction,
            normal: direction.perpendicular(),
        })
    }

    /// The two corners on either side of `point`, clockwise side first
    pub(crate) fn offsets(&self, point: Vec2D, half_width: f32) -> (Vec2D, Vec2D) {
        let offset = self.normal * half_width;
        (point + offset, point - offset)
    }

    /// Emit the quad between two pairs of corners.
    ///
    /// `start` and `end` hold the clockwise and counter-clockwise corner at
    /// either end of the segment.
    pub(crate) fn emit<V: StrokeVertex>(
        &self,
        start: (Vec2D, Vec2D),
        end: (Vec2D, Vec2D),
        mesh: &mut Mesh<V>,
    ) {
        let cw_normal = self.normal;
        let ccw_normal = -self.normal;
        let inverse_direction = -self.direction;

        mesh.push_quad(
            V::from_parts(start.0, cw_normal, self.direction),
            V::from_parts(start.1, ccw_normal, self.direction),
            V::from_parts(end.1, ccw_normal, inverse_direction),
            V::from_parts(end.0, cw_normal, inverse_direction),
        );
    }
}

/// Tessellate a single straight segment into a quad made of two triangles.
///
/// Every vertex carries the normal of the edge it lies on. With
/// [Extrusion::Deferred] all corners stay on the centerline.
pub fn tessellate_straight_segment<V: StrokeVertex>(
    p1: Vec2D,
    p2: Vec2D,
    style: &StrokeStyle,
) -> Result<Mesh<V>, StrokeError> {
    style.validate()?;

    let frame = SegmentFrame::new(0, p1, p2)?;
    let half_width = match style.extrusion {
        Extrusion::Geometric => style.half_width(),
        Extrusion::Deferred => 0.,
    };

    let mut mesh = Mesh::with_capacity(2);
    frame.emit(
        frame.offsets(p1, half_width),
        frame.offsets(p2, half_width),
        &mut mesh,
    );

    log::trace!("Tessellated segment {p1:?} -> {p2:?} (width {})", style.width);
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use math::Vec2D;

    use super::tessellate_straight_segment;
    use crate::{Extrusion, SeamVertex, SegmentVertex, StrokeError, StrokeStyle, StrokeVertex};

    #[test]
    fn horizontal_segment() {
        let mesh: crate::Mesh<SegmentVertex> = tessellate_straight_segment(
            Vec2D::new(0., 0.),
            Vec2D::new(10., 0.),
            &StrokeStyle::new(2.),
        )
        .unwrap();

        assert_eq!(mesh.len(), 2);

        let extent = mesh.bounding_box().unwrap();
        assert_eq!(extent.top_left(), Vec2D::new(0., -1.));
        assert_eq!(extent.bottom_right(), Vec2D::new(10., 1.));

        for vertex in mesh.vertices() {
            // Every corner is offset along its own normal
            assert_eq!(vertex.normal.magnitude(), 1.);
            assert_eq!(vertex.position.y, vertex.normal.y);
        }
    }

    #[test]
    fn consistent_winding() {
        let mesh: crate::Mesh<SegmentVertex> = tessellate_straight_segment(
            Vec2D::new(3., 7.),
            Vec2D::new(-5., 1.),
            &StrokeStyle::new(3.),
        )
        .unwrap();

        let [first, second] = [mesh.triangles()[0], mesh.triangles()[1]];
        assert_eq!(
            first.signed_double_area().signum(),
            second.signed_double_area().signum()
        );
    }

    #[test]
    fn seam_vertices_carry_direction() {
        let mesh: crate::Mesh<SeamVertex> = tessellate_straight_segment(
            Vec2D::new(0., 0.),
            Vec2D::new(0., 5.),
            &StrokeStyle::new(1.),
        )
        .unwrap();

        let direction = Vec2D::new(0., 1.);
        for vertex in mesh.vertices() {
            if vertex.position.y == 0. {
                assert_eq!(vertex.direction, direction);
            } else {
                assert_eq!(vertex.direction, -direction);
            }
        }
    }

    #[test]
    fn deferred_extrusion_keeps_centerline() {
        let style = StrokeStyle::new(4.).with_extrusion(Extrusion::Deferred);
        let mesh: crate::Mesh<SegmentVertex> =
            tessellate_straight_segment(Vec2D::new(1., 1.), Vec2D::new(5., 1.), &style).unwrap();

        assert_eq!(mesh.area(), 0.);
        for vertex in mesh.vertices() {
            assert_eq!(vertex.position.y, 1.);
            assert_eq!(vertex.normal().magnitude(), 1.);
        }
    }

    #[test]
    fn rejects_bad_width() {
        let result: Result<crate::Mesh<SegmentVertex>, _> = tessellate_straight_segment(
            Vec2D::new(0., 0.),
            Vec2D::new(1., 1.),
            &StrokeStyle::new(-2.),
        );
        assert_eq!(result, Err(StrokeError::InvalidStrokeWidth { width: -2. }));
    }

    #[test]
    fn rejects_zero_length() {
        let point = Vec2D::new(4., 2.);
        let result: Result<crate::Mesh<SegmentVertex>, _> =
            tessellate_straight_segment(point, point, &StrokeStyle::new(2.));
        assert_eq!(result, Err(StrokeError::ZeroLengthSegment { index: 0 }));
    }
}
