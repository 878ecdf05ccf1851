//! Antialiased coverage for stroke meshes
//!
//! ## Design
//! Stroke meshes come out of the [tessellate] crate with just enough per-vertex
//! data to compute coverage without multisampling. A [Shader] maps that data
//! into window space, the [Renderer] interpolates it across each triangle and
//! the shader's fragment stage turns it into a black pixel whose alpha is the
//! coverage computed in [coverage].
//!
//! There is no global state, every draw call receives a [RenderContext].
//!
//! The [SoftwareRenderer] rasterizes on the CPU into a [Texture]. A GPU
//! backend would implement the same [Renderer] trait.
//!
//! ## Related
//! * [Antialiased lines in WebGL](https://mattdesl.svbtle.com/drawing-lines-is-hard)
//! * [tiny-skia](https://github.com/RazrFalcon/tiny-skia) (CPU rasterization, Rust)

pub mod coverage;
mod context;
mod error;
mod rasterizer;
mod renderer;
pub mod shader;
mod software;
mod texture;

pub use context::RenderContext;
pub use coverage::RadialFeather;
pub use error::RenderError;
pub use rasterizer::{rasterize_triangle, Fragment};
pub use renderer::{draw_arc, draw_polyline, draw_segment, Renderer};
pub use shader::{RadialStrokeShader, SeamStrokeShader, SegmentStrokeShader, Shader, Varying};
pub use software::SoftwareRenderer;
pub use texture::Texture;
