//! Bar renderers.
//!
//! A [`Renderer`] turns a [`BarSequence`] into bytes ready to write out.
//! The back-end is picked from [`RenderConfig`], so the cipher path never
//! depends on how bars are drawn.

mod png;
mod text;

pub use png::PngRenderer;
pub use text::TextRenderer;

use crate::config::{RenderBackend, RenderConfig};
use crate::encoding::BarSequence;
use crate::error::Result;

/// Draws a bar sequence.
pub trait Renderer {
    /// Render the bars into the back-end's output format.
    fn render(&self, bars: &BarSequence) -> Result<Vec<u8>>;

    /// File extension for the output format.
    fn extension(&self) -> &'static str;
}

/// Build the renderer selected by `config`.
pub fn renderer_for(config: &RenderConfig) -> Result<Box<dyn Renderer>> {
    config.validate()?;
    tracing::debug!(backend = %config.backend, "selected renderer");
    Ok(match config.backend {
        RenderBackend::Png => Box::new(PngRenderer::new(config.bar_width, config.height)),
        RenderBackend::Text => Box::new(TextRenderer::new(config.height)),
    })
}
