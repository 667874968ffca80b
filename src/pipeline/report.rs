//! Output of a successful run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::analysis::Analysis;
use crate::error::Result;
use crate::export::TOP_TOKENS_IN_DOCUMENT;
use crate::report::{RenderedImage, WordCloudImage};
use crate::types::{Essay, EssayVariant};

/// Characters of the essay shown inline.
pub const PREVIEW_CHARS: usize = 2000;

pub const WORD_CLOUD_FILE: &str = "wordcloud.png";
pub const FREQUENCY_PLOT_FILE: &str = "frequencies.svg";

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub author: String,
    pub work: String,
    pub variant: EssayVariant,
    pub generated_at: DateTime<Utc>,
    pub essay: Essay,
    pub analysis: Analysis,
    pub word_cloud: WordCloudImage,
    pub frequency_plot: RenderedImage,
    /// `.docx` bytes.
    pub document: Vec<u8>,
    /// Suggested download name for `document`.
    pub filename: String,
}

impl AnalysisReport {
    pub fn preview(&self) -> String {
        self.essay.preview(PREVIEW_CHARS)
    }

    /// The rows listed in the document's linguistic-analysis section.
    pub fn top_tokens(&self) -> Vec<(&str, u64)> {
        self.analysis
            .frequencies
            .most_common(TOP_TOKENS_IN_DOCUMENT)
    }

    /// Write both images and the document into `dir`, creating it if needed.
    pub fn write_artifacts(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let cloud = dir.join(WORD_CLOUD_FILE);
        self.word_cloud.write_to(&cloud)?;
        let plot = dir.join(FREQUENCY_PLOT_FILE);
        self.frequency_plot.write_to(&plot)?;
        let document = dir.join(&self.filename);
        std::fs::write(&document, &self.document)?;
        Ok(vec![cloud, plot, document])
    }
}
