use math::{Color, Vec2D};
use tessellate::Mesh;

use crate::{
    rasterizer::rasterize_triangle,
    shader::{Shader, Varying},
    RenderContext, RenderError, Renderer, Texture,
};

/// Renders into a [Texture] on the CPU
#[derive(Clone, Debug)]
pub struct SoftwareRenderer {
    target: Texture<Color>,
}

impl SoftwareRenderer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            target: Texture::new(width, height),
        }
    }

    #[must_use]
    pub fn texture(&self) -> &Texture<Color> {
        &self.target
    }

    #[must_use]
    pub fn into_texture(self) -> Texture<Color> {
        self.target
    }

    /// Look up a pixel by its position in path coordinates, with
    /// row `0` at the top of the image
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.target.get_pixel(x, y)
    }
}

impl Renderer for SoftwareRenderer {
    type Error = RenderError;

    fn clear(&mut self, color: Color) {
        self.target.clear(color);
    }

    fn draw<S: Shader>(
        &mut self,
        shader: &S,
        mesh: &Mesh<S::Vertex>,
        context: &RenderContext,
    ) -> Result<(), Self::Error> {
        let (width, height) = (self.target.width(), self.target.height());
        if (context.width, context.height) != (width, height) {
            return Err(RenderError::ViewportMismatch {
                context_width: context.width,
                context_height: context.height,
                target_width: width,
                target_height: height,
            });
        }

        let mut fragments = 0;
        for triangle in mesh.triangles() {
            let shaded = triangle.0.map(|vertex| shader.vertex(&vertex, context));
            let corners: [Vec2D; 3] = shaded.map(|(position, _)| position);
            let varyings = shaded.map(|(_, varying)| varying);

            rasterize_triangle(corners, width, height, |fragment| {
                let varying = S::Varying::interpolate(varyings, fragment.weights);
                let color = shader.fragment(fragment.frag_coord, &varying, context);

                // Window rows count from the bottom, texture rows from the top
                self.target
                    .blend_pixel(fragment.x, height - 1 - fragment.y, color);
                fragments += 1;
            });
        }

        log::trace!(
            "Drew {} triangles covering {fragments} fragments",
            mesh.len()
        );
        Ok(())
    }
}
