//! Static renderings of a frequency table: word cloud and frequency plot.
//!
//! The word cloud is a PNG raster; the frequency plot is SVG text.

pub mod chart;
pub mod wordcloud;

pub use chart::{render_frequency_plot, DEFAULT_TOP_N};
pub use wordcloud::{render_word_cloud, WordCloudImage, WordCloudOptions};

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;

/// A rendered SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub svg: String,
}

impl RenderedImage {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.svg)?;
        Ok(())
    }
}

/// Accumulates SVG elements inside a fixed canvas.
pub(crate) struct SvgCanvas {
    width: u32,
    height: u32,
    body: String,
}

impl SvgCanvas {
    pub(crate) fn new(width: u32, height: u32, background: &str) -> Self {
        let mut canvas = Self {
            width,
            height,
            body: String::new(),
        };
        canvas.push(format_args!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{background}"/>"#
        ));
        canvas
    }

    pub(crate) fn push(&mut self, element: std::fmt::Arguments<'_>) {
        let _ = self.body.write_fmt(element);
        self.body.push('\n');
    }

    pub(crate) fn finish(self) -> RenderedImage {
        let svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        );
        RenderedImage {
            width: self.width,
            height: self.height,
            svg,
        }
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
