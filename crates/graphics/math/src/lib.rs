//! Common utilities used in stroke tessellation and rendering

mod angle;
mod color;
mod rect;
mod transform;
mod vec2d;

pub use angle::Angle;
pub use color::Color;
pub use rect::Rectangle;
pub use transform::AffineTransform;
pub use vec2d::Vec2D;
