use math::{Rectangle, Vec2D};

/// Twice the signed area of the triangle `(a, b, point)`.
///
/// Positive if `point` lies to the left of the edge from `a` to `b` in a
/// coordinate system whose y axis points up.
#[inline]
fn edge_function(a: Vec2D, b: Vec2D, point: Vec2D) -> f32 {
    (b - a).cross_product(point - a)
}

/// Whether pixels exactly on the edge from `a` to `b` belong to the triangle.
///
/// Two triangles that share an edge traverse it in opposite directions, so
/// exactly one of them owns the pixels on it. That way no pixel gets blended
/// twice.
#[inline]
fn owns_edge(a: Vec2D, b: Vec2D) -> bool {
    let edge = b - a;
    edge.y < 0. || (edge.y == 0. && edge.x > 0.)
}

/// A pixel covered by a triangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    /// Column of the pixel, counted from the left
    pub x: usize,

    /// Row of the pixel, counted from the bottom
    pub y: usize,

    /// Center of the pixel in window coordinates
    pub frag_coord: Vec2D,

    /// Barycentric weights of the triangle's corners at `frag_coord`
    pub weights: [f32; 3],
}

/// Call `emit` for every pixel whose center lies inside the triangle.
///
/// `corners` are in window coordinates, the visited area is clipped
/// to `[0, width) x [0, height)`. The winding of the triangle does not matter,
/// triangles without area produce no fragments.
pub fn rasterize_triangle<F: FnMut(Fragment)>(
    corners: [Vec2D; 3],
    width: usize,
    height: usize,
    mut emit: F,
) {
    if !corners.iter().all(Vec2D::is_finite) {
        log::warn!("Skipping triangle with non-finite corners {corners:?}");
        return;
    }

    let [a, mut b, mut c] = corners;
    let mut double_area = edge_function(a, b, c);
    let mut swapped = false;
    if double_area < 0. {
        (b, c) = (c, b);
        double_area = -double_area;
        swapped = true;
    }
    if double_area <= f32::EPSILON {
        return;
    }

    let Some(area) = Rectangle::bounding_box([a, b, c])
        .and_then(|extent| extent.snap_to_grid(width, height))
    else {
        return;
    };

    let edges = [(b, c), (c, a), (a, b)];
    let owned = edges.map(|(from, to)| owns_edge(from, to));

    for y in area.top_left().y..=area.bottom_right().y {
        for x in area.top_left().x..=area.bottom_right().x {
            let frag_coord = Vec2D::new(x as f32 + 0.5, y as f32 + 0.5);

            let mut weights = [0.; 3];
            let mut inside = true;
            for (index, (from, to)) in edges.into_iter().enumerate() {
                let distance = edge_function(from, to, frag_coord);
                if distance < 0. || (distance == 0. && !owned[index]) {
                    inside = false;
                    break;
                }
                weights[index] = distance / double_area;
            }

            if !inside {
                continue;
            }

            if swapped {
                weights.swap(1, 2);
            }

            emit(Fragment {
                x,
                y,
                frag_coord,
                weights,
            });
        }
    }
}
