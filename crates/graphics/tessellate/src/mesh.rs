use math::{Rectangle, Vec2D};

use crate::Vertex;

/// Three vertices of the same kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<V>(pub [V; 3]);

impl<V: Vertex> Triangle<V> {
    #[inline]
    #[must_use]
    pub fn positions(&self) -> [Vec2D; 3] {
        self.0.map(|vertex| vertex.position())
    }

    /// Twice the signed area of the triangle.
    ///
    /// The sign tells the winding order of the vertices.
    #[must_use]
    pub fn signed_double_area(&self) -> f32 {
        let [a, b, c] = self.positions();
        (b - a).cross_product(c - a)
    }

    #[must_use]
    pub fn area(&self) -> f32 {
        self.signed_double_area().abs() / 2.
    }
}

/// The triangles making up a single stroke.
///
/// A mesh is built once per draw call and only ever appended to.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<V> {
    triangles: Vec<Triangle<V>>,
}

impl<V> Default for Mesh<V> {
    fn default() -> Self {
        Self { triangles: vec![] }
    }
}

impl<V: Vertex> Mesh<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn push(&mut self, triangle: Triangle<V>) {
        self.triangles.push(triangle);
    }

    /// Append a quad as two triangles.
    ///
    /// The corners must be given in order around the quad, the triangles
    /// `(a, b, c)` and `(a, c, d)` then share its winding.
    pub fn push_quad(&mut self, a: V, b: V, c: V, d: V) {
        self.triangles.push(Triangle([a, b, c]));
        self.triangles.push(Triangle([a, c, d]));
    }

    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[Triangle<V>] {
        &self.triangles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.triangles.iter().flat_map(|triangle| triangle.0.iter())
    }

    /// Flatten the mesh into an interleaved vertex buffer, laid out
    /// according to [Vertex::LAYOUT].
    #[must_use]
    pub fn vertex_data(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.vertex_count() * V::LAYOUT.components());
        for vertex in self.vertices() {
            vertex.write_to(&mut buffer);
        }
        buffer
    }

    /// Total area covered by the triangles, counting overlaps twice
    #[must_use]
    pub fn area(&self) -> f32 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<Rectangle> {
        Rectangle::bounding_box(self.vertices().map(Vertex::position))
    }
}

#[cfg(test)]
mod tests {
    use math::Vec2D;

    use super::Mesh;
    use crate::{RadialVertex, Vertex};

    fn vertex(x: f32, y: f32) -> RadialVertex {
        RadialVertex {
            position: Vec2D::new(x, y),
        }
    }

    #[test]
    fn quad_keeps_winding() {
        let mut mesh = Mesh::new();
        mesh.push_quad(
            vertex(0., 0.),
            vertex(1., 0.),
            vertex(1., 1.),
            vertex(0., 1.),
        );

        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.vertex_count(), 6);
        let [first, second] = [mesh.triangles()[0], mesh.triangles()[1]];
        assert!(first.signed_double_area() > 0.);
        assert!(second.signed_double_area() > 0.);
        assert_eq!(mesh.area(), 1.);
    }

    #[test]
    fn vertex_data_is_interleaved() {
        let mut mesh = Mesh::new();
        mesh.push_quad(
            vertex(0., 0.),
            vertex(2., 0.),
            vertex(2., 3.),
            vertex(0., 3.),
        );

        let data = mesh.vertex_data();
        assert_eq!(data.len(), 6 * RadialVertex::LAYOUT.components());
        assert_eq!(&data[..6], &[0., 0., 2., 0., 2., 3.]);

        let extent = mesh.bounding_box().unwrap();
        assert_eq!(extent.width(), 2.);
        assert_eq!(extent.height(), 3.);
    }
}
