//! Per-vertex records emitted by the tessellator
//!
//! Each primitive kind has its own vertex type, so a single [Mesh](crate::Mesh)
//! can never mix attribute encodings.

use std::fmt;

use math::Vec2D;

/// A single named attribute inside an interleaved vertex record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,

    /// Number of `f32` components
    pub components: usize,

    /// Offset from the start of the record, in bytes
    pub offset: usize,
}

/// Describes how vertex records are laid out in the flat buffer returned
/// by [Mesh::vertex_data](crate::Mesh::vertex_data).
///
/// A backend must bind its attribute pointers according to this layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub attributes: &'static [VertexAttribute],
}

impl VertexLayout {
    const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

    /// Number of `f32`s in a single record
    #[must_use]
    pub const fn components(&self) -> usize {
        let mut components = 0;
        let mut i = 0;
        while i < self.attributes.len() {
            components += self.attributes[i].components;
            i += 1;
        }
        components
    }

    /// Distance between two consecutive records, in bytes
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.components() * Self::FLOAT_SIZE
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }
}

const POSITION: VertexAttribute = VertexAttribute {
    name: "a_Position",
    components: 2,
    offset: 0,
};

const NORMAL: VertexAttribute = VertexAttribute {
    name: "a_Normal",
    components: 2,
    offset: 2 * VertexLayout::FLOAT_SIZE,
};

const DIRECTION: VertexAttribute = VertexAttribute {
    name: "a_Direction",
    components: 2,
    offset: 4 * VertexLayout::FLOAT_SIZE,
};

pub trait Vertex: Copy + fmt::Debug {
    const LAYOUT: VertexLayout;

    fn position(&self) -> Vec2D;

    /// Append the record to an interleaved buffer, in [Self::LAYOUT] order
    fn write_to(&self, buffer: &mut Vec<f32>);
}

/// Vertices that the segment and join tessellators know how to produce
pub trait StrokeVertex: Vertex {
    /// Build a vertex from its position, the unit normal of the side of the
    /// segment it lies on and the segment direction as seen from its endpoint.
    fn from_parts(position: Vec2D, normal: Vec2D, direction: Vec2D) -> Self;

    fn normal(&self) -> Vec2D;
}

/// Vertex of a circular stroke.
///
/// Carries no attributes, the coverage stage derives everything from the
/// fragment position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialVertex {
    pub position: Vec2D,
}

impl Vertex for RadialVertex {
    const LAYOUT: VertexLayout = VertexLayout {
        attributes: &[POSITION],
    };

    fn position(&self) -> Vec2D {
        self.position
    }

    fn write_to(&self, buffer: &mut Vec<f32>) {
        buffer.extend_from_slice(&[self.position.x, self.position.y]);
    }
}

/// Vertex of a straight stroke segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentVertex {
    pub position: Vec2D,

    /// Unit normal pointing towards the edge this vertex lies on
    pub normal: Vec2D,
}

impl Vertex for SegmentVertex {
    const LAYOUT: VertexLayout = VertexLayout {
        attributes: &[POSITION, NORMAL],
    };

    fn position(&self) -> Vec2D {
        self.position
    }

    fn write_to(&self, buffer: &mut Vec<f32>) {
        buffer.extend_from_slice(&[
            self.position.x,
            self.position.y,
            self.normal.x,
            self.normal.y,
        ]);
    }
}

impl StrokeVertex for SegmentVertex {
    fn from_parts(position: Vec2D, normal: Vec2D, _direction: Vec2D) -> Self {
        Self { position, normal }
    }

    fn normal(&self) -> Vec2D {
        self.normal
    }
}

/// Vertex of a straight stroke segment that also knows which way
/// the segment runs.
///
/// Vertices at the start of a segment carry its direction, vertices at the end
/// carry the inverse direction. Interpolated across the segment, the direction
/// only has unit length close to the endpoints, which is what the seam
/// correction in the coverage stage looks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeamVertex {
    pub position: Vec2D,
    pub normal: Vec2D,
    pub direction: Vec2D,
}

impl Vertex for SeamVertex {
    const LAYOUT: VertexLayout = VertexLayout {
        attributes: &[POSITION, NORMAL, DIRECTION],
    };

    fn position(&self) -> Vec2D {
        self.position
    }

    fn write_to(&self, buffer: &mut Vec<f32>) {
        buffer.extend_from_slice(&[
            self.position.x,
            self.position.y,
            self.normal.x,
            self.normal.y,
            self.direction.x,
            self.direction.y,
        ]);
    }
}

impl StrokeVertex for SeamVertex {
    fn from_parts(position: Vec2D, normal: Vec2D, direction: Vec2D) -> Self {
        Self {
            position,
            normal,
            direction,
        }
    }

    fn normal(&self) -> Vec2D {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::{RadialVertex, SeamVertex, SegmentVertex, Vertex};

    #[test]
    fn layouts() {
        assert_eq!(RadialVertex::LAYOUT.components(), 2);
        assert_eq!(RadialVertex::LAYOUT.stride(), 8);

        assert_eq!(SegmentVertex::LAYOUT.components(), 4);
        assert_eq!(SegmentVertex::LAYOUT.stride(), 16);
        assert_eq!(SegmentVertex::LAYOUT.attribute("a_Normal").unwrap().offset, 8);

        assert_eq!(SeamVertex::LAYOUT.components(), 6);
        assert_eq!(SeamVertex::LAYOUT.stride(), 24);
        assert_eq!(
            SeamVertex::LAYOUT.attribute("a_Direction").unwrap().offset,
            16
        );
        assert!(SegmentVertex::LAYOUT.attribute("a_Direction").is_none());
    }
}
