//! Word cloud renderer.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use tracing::debug;
use wcloud::{Tokenizer, WordCloud, WordCloudSize};

use crate::analysis::FrequencyTable;
use crate::error::{LectioError, Result};

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCloudOptions {
    pub width: u32,
    pub height: u32,
    pub max_words: u32,
    /// Layout seed; the same table and seed give the same image.
    pub seed: u64,
}

impl Default for WordCloudOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 200,
            seed: 1,
        }
    }
}

/// A rendered PNG raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCloudImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl WordCloudImage {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }
}

/// Render the most frequent tokens, font size scaled by frequency.
///
/// An empty table yields a blank canvas of the requested size.
pub fn render_word_cloud(
    table: &FrequencyTable,
    options: &WordCloudOptions,
) -> Result<WordCloudImage> {
    let top = table.most_common(options.max_words as usize);
    if top.is_empty() {
        let blank = RgbaImage::from_pixel(options.width, options.height, BACKGROUND);
        return encode(&blank);
    }

    // The cloud recounts its input, so each token is repeated by its count.
    let text = top
        .iter()
        .flat_map(|(word, count)| std::iter::repeat(*word).take(*count as usize))
        .collect::<Vec<_>>()
        .join(" ");

    let cloud = WordCloud::default()
        .with_tokenizer(Tokenizer::default().with_max_words(options.max_words))
        .with_rng_seed(options.seed);
    let size = WordCloudSize::FromDimensions {
        width: options.width,
        height: options.height,
    };
    let image = DynamicImage::from(cloud.generate_from_text(&text, size, 1.0)).into_rgba8();
    debug!(words = top.len(), "word cloud rendered");
    encode(&image)
}

fn encode(image: &RgbaImage) -> Result<WordCloudImage> {
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| LectioError::Export(format!("cannot encode word cloud: {e}")))?;
    Ok(WordCloudImage {
        width: image.width(),
        height: image.height(),
        png,
    })
}
