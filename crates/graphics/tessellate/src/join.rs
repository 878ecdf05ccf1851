use math::Vec2D;

use crate::{
    segment::SegmentFrame, tessellate_straight_segment, Extrusion, JoinPolicy, Mesh, Polyline,
    StrokeError, StrokeStyle, StrokeVertex, Triangle,
};

/// Compute the vector from a join's vertex to its outer miter point.
///
/// The vector is the (unnormalized) sum of both clockwise normals, scaled by
/// `half_width / cos(half angle)`. Both segments share the resulting extrude
/// points, which keeps the join free of gaps.
///
/// Returns `None` if the miter exceeds the limit of a [JoinPolicy::Clamp],
/// the join is beveled then.
fn miter_vector(
    index: usize,
    incoming: &SegmentFrame,
    outgoing: &SegmentFrame,
    style: &StrokeStyle,
) -> Result<Option<Vec2D>, StrokeError> {
    let join_normal = incoming.normal + outgoing.normal;
    let cos_half_angle = outgoing.normal.dot(join_normal);
    let half_width = style.half_width();
    let miter_limit = style.join_policy.miter_limit();

    if cos_half_angle > 0. && cos_half_angle.is_finite() {
        let miter_length_ratio = 1. / cos_half_angle;
        let miter = join_normal * (miter_length_ratio * half_width);

        if miter.magnitude() <= miter_limit * half_width {
            return Ok(Some(miter));
        }
    }

    match style.join_policy {
        JoinPolicy::FailFast { .. } => Err(StrokeError::DegenerateJoin {
            index,
            cos_half_angle,
        }),
        JoinPolicy::Clamp { .. } => {
            log::warn!(
                "Beveling join at point {index}, its miter (cos(half angle) = {cos_half_angle}) exceeds {miter_limit}x the half width"
            );
            Ok(None)
        },
    }
}

/// Fill the notch on the outer side of a beveled join.
///
/// The triangle spans the join vertex and the square corners of both
/// segments on the outer side of the turn, ordered to match the winding of
/// the segment quads.
fn push_bevel<V: StrokeVertex>(
    incoming: &SegmentFrame,
    outgoing: &SegmentFrame,
    half_width: f32,
    mesh: &mut Mesh<V>,
) {
    let turn = incoming.direction.cross_product(outgoing.direction);
    if turn == 0. {
        // A full reversal has no outer side
        return;
    }

    // Left turns bulge out on the counter-clockwise side
    let side = -turn.signum();
    let incoming_normal = incoming.normal * side;
    let outgoing_normal = outgoing.normal * side;

    let vertex = incoming.end;
    let center = V::from_parts(vertex, Vec2D::ORIGIN, Vec2D::ORIGIN);
    let incoming_corner = V::from_parts(
        vertex + incoming_normal * half_width,
        incoming_normal,
        Vec2D::ORIGIN,
    );
    let outgoing_corner = V::from_parts(
        vertex + outgoing_normal * half_width,
        outgoing_normal,
        Vec2D::ORIGIN,
    );

    let triangle = if turn > 0. {
        Triangle([center, incoming_corner, outgoing_corner])
    } else {
        Triangle([center, outgoing_corner, incoming_corner])
    };
    mesh.push(triangle);
}

/// Tessellate two segments `p1 -> p2` and `p2 -> p3` connected by a miter join.
///
/// Each segment becomes a quad spanning from its outer end to the two extrude
/// points around `p2`, for a total of four triangles.
pub fn tessellate_join<V: StrokeVertex>(
    p1: Vec2D,
    p2: Vec2D,
    p3: Vec2D,
    style: &StrokeStyle,
) -> Result<Mesh<V>, StrokeError> {
    let polyline = Polyline::new(vec![p1, p2, p3])?;
    tessellate_polyline(&polyline, style)
}

/// Tessellate a polyline with miter joins at every interior point.
///
/// Produces two triangles per segment, plus one per beveled join. Segment
/// ends at the first and last point are cut off square, segment ends at
/// interior points meet at the shared miter points of that join.
pub fn tessellate_polyline<V: StrokeVertex>(
    polyline: &Polyline,
    style: &StrokeStyle,
) -> Result<Mesh<V>, StrokeError> {
    style.validate()?;

    let points = polyline.points();
    if let [p1, p2] = points {
        return tessellate_straight_segment(*p1, *p2, style);
    }

    if style.extrusion == Extrusion::Deferred {
        log::debug!("Joins cannot defer their extrusion, extruding geometrically");
    }

    let half_width = style.half_width();
    let frames = points
        .windows(2)
        .enumerate()
        .map(|(i, segment)| SegmentFrame::new(i, segment[0], segment[1]))
        .collect::<Result<Vec<_>, StrokeError>>()?;

    // Compute every join before emitting anything, a degenerate join must
    // not leave a partial mesh behind
    let miters = frames
        .windows(2)
        .enumerate()
        .map(|(i, pair)| miter_vector(i + 1, &pair[0], &pair[1], style))
        .collect::<Result<Vec<_>, StrokeError>>()?;

    let num_bevels = miters.iter().filter(|miter| miter.is_none()).count();
    let mut mesh = Mesh::with_capacity(2 * frames.len() + num_bevels);
    for (i, frame) in frames.iter().enumerate() {
        let start = match i.checked_sub(1).and_then(|join| miters[join]) {
            Some(miter) => (frame.start + miter, frame.start - miter),
            None => frame.offsets(frame.start, half_width),
        };

        let end = match miters.get(i).copied().flatten() {
            Some(miter) => (frame.end + miter, frame.end - miter),
            None => frame.offsets(frame.end, half_width),
        };

        frame.emit(start, end, &mut mesh);
    }

    for (pair, miter) in frames.windows(2).zip(&miters) {
        if miter.is_none() {
            push_bevel(&pair[0], &pair[1], half_width, &mut mesh);
        }
    }

    log::debug!(
        "Tessellated polyline with {} points into {} triangles",
        points.len(),
        mesh.len()
    );
    Ok(mesh)
}
