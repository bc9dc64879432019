//! Terminal strip made of block characters.

use crate::config::MAX_IMAGE_WIDTH;
use crate::encoding::BarSequence;
use crate::error::{Error, Result};
use crate::render::Renderer;

const BLACK: char = '█';
const WHITE: char = ' ';

/// Renders one character per bar, repeated over `height` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    height: u32,
}

impl TextRenderer {
    pub fn new(height: u32) -> Self {
        Self { height }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, bars: &BarSequence) -> Result<Vec<u8>> {
        if bars.len() > MAX_IMAGE_WIDTH as usize {
            return Err(Error::InvalidConfig(format!(
                "{} bars exceed the maximum width of {} columns",
                bars.len(),
                MAX_IMAGE_WIDTH
            )));
        }
        let mut line: String = bars
            .iter()
            .map(|bar| if bar.is_black() { BLACK } else { WHITE })
            .collect();
        line.push('\n');
        Ok(line.repeat(self.height as usize).into_bytes())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
