//! Turns stroked paths into triangle meshes
//!
//! ## Design
//! Every emitted vertex carries just enough data for the coverage stage to
//! antialias the stroke's edges without multisampling:
//! * straight segments carry the unit normal of the edge they lie on, whose
//!   interpolated length tells how far a pixel is from the centerline
//! * circular strokes carry nothing, the coverage stage measures the distance
//!   to the circle's center per pixel instead
//!
//! Joins between segments are mitered. A turn of almost 180 degrees makes the
//! miter arbitrarily long, the [JoinPolicy] decides whether that is an error
//! or whether the join gets beveled.
//!
//! ## Related
//! * [Lyon](https://github.com/nical/lyon) (CPU tessellation, Rust)
//! * [NanoVG](https://github.com/memononen/nanovg) (antialiased strokes via fringe geometry, C)

mod arc;
mod error;
mod join;
mod mesh;
mod path;
mod segment;
mod style;
mod vertex;

pub use arc::{tessellate_arc, tessellate_arc_quad, tessellate_circle};
pub use error::StrokeError;
pub use join::{tessellate_join, tessellate_polyline};
pub use mesh::{Mesh, Triangle};
pub use path::{Arc, Polyline, Quadrant};
pub use segment::tessellate_straight_segment;
pub use style::{Extrusion, JoinPolicy, StrokeStyle};
pub use vertex::{
    RadialVertex, SeamVertex, SegmentVertex, StrokeVertex, Vertex, VertexAttribute, VertexLayout,
};
