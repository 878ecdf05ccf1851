use std::io;

use error_derive::Error;
use tessellate::StrokeError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[msg = "failed to tessellate stroke"]
    Stroke(StrokeError),

    #[msg = "render context is {context_width}x{context_height} pixels, but the target is {target_width}x{target_height}"]
    ViewportMismatch {
        context_width: usize,
        context_height: usize,
        target_width: usize,
        target_height: usize,
    },

    #[msg = "failed to write image"]
    Io(io::Error),
}
