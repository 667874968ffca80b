//! Convenience re-exports for common use.

pub use crate::analysis::{analyze, Analysis, FrequencyTable};
pub use crate::config::LectioConfig;
pub use crate::error::{LectioError, Result};
pub use crate::export::{ExportLayout, ExportSections};
pub use crate::pipeline::{AnalysisReport, Pipeline, PipelineEvent, PipelineState};
pub use crate::provider::{Backend, TextGenerator};
pub use crate::resources::{Language, ResourceStore, StopWords};
pub use crate::types::{Essay, EssayVariant, GenerationRequest, GenerationSettings};
