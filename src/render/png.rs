//! Grayscale PNG output.

use crate::config::MAX_IMAGE_WIDTH;
use crate::encoding::BarSequence;
use crate::error::{Error, Result};
use crate::render::Renderer;
use image::{GrayImage, ImageBuffer, ImageFormat, Luma};
use std::io::Cursor;

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

/// Renders each bar as a `bar_width` x `height` block, black for `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngRenderer {
    bar_width: u32,
    height: u32,
}

impl PngRenderer {
    /// Create a renderer with the given bar width and image height in pixels.
    pub fn new(bar_width: u32, height: u32) -> Self {
        Self { bar_width, height }
    }

    /// Image width in pixels for `bars` bars.
    ///
    /// Fails when the width overflows or exceeds [`MAX_IMAGE_WIDTH`].
    pub fn image_width(&self, bars: usize) -> Result<u32> {
        u32::try_from(bars)
            .ok()
            .and_then(|n| n.checked_mul(self.bar_width))
            .filter(|w| *w <= MAX_IMAGE_WIDTH)
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "{} bars at {} px exceed the maximum image width of {} px",
                    bars, self.bar_width, MAX_IMAGE_WIDTH
                ))
            })
    }

    /// Draw the bars into a grayscale image.
    pub fn draw(&self, bars: &BarSequence) -> Result<GrayImage> {
        if bars.is_empty() {
            return Err(Error::Render("no bars to draw".to_string()));
        }
        let width = self.image_width(bars.len())?;
        let bars = bars.as_slice();

        Ok(ImageBuffer::from_fn(width, self.height, |x, _| {
            if bars[(x / self.bar_width) as usize].is_black() {
                BLACK
            } else {
                WHITE
            }
        }))
    }
}

impl Renderer for PngRenderer {
    fn render(&self, bars: &BarSequence) -> Result<Vec<u8>> {
        let img = self.draw(bars)?;

        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)?;

        tracing::debug!(width = img.width(), height = img.height(), "rendered png");
        Ok(out.into_inner())
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}
