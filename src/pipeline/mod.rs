//! One analysis run: prompt → fetch → analyze → render → export.
//!
//! A run is linear with a single branch after fetching:
//!
//! ```text
//! Idle → Fetching ─┬→ Failed
//!                  └→ Analyzing → Rendering → Ready
//! ```
//!
//! `Failed` and `Ready` are terminal; calling [`Pipeline::run`] again starts
//! a fresh run from `Idle`.

mod report;

pub use report::{AnalysisReport, PREVIEW_CHARS};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::analysis::{self, Analysis};
use crate::config::LectioConfig;
use crate::error::{LectioError, Result};
use crate::export::{self, ExportLayout};
use crate::generation;
use crate::prompt;
use crate::provider::{self, TextGenerator};
use crate::report::{self as render, WordCloudOptions};
use crate::resources::{ResourceStore, StopWords};
use crate::types::{Essay, EssayVariant, GenerationSettings};

/// Lifecycle state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Fetching,
    Analyzing,
    Rendering,
    Ready,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

/// A state transition, delivered to the event sink.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineEvent {
    pub run_id: Uuid,
    pub state: PipelineState,
    pub at: DateTime<Utc>,
    /// Set on `Failed`.
    pub error: Option<String>,
}

/// Callback receiving every state transition.
pub type PipelineEventSink = Arc<dyn Fn(PipelineEvent) + Send + Sync>;

/// Runs the whole analysis for an author and a work.
pub struct Pipeline {
    generator: Arc<dyn TextGenerator>,
    stopwords: StopWords,
    variant: EssayVariant,
    settings: GenerationSettings,
    layout: ExportLayout,
    cloud: WordCloudOptions,
    top_n: usize,
    event_sink: Option<PipelineEventSink>,
}

impl Pipeline {
    /// Pipeline with the backend's default sampling and the variant's layout.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        stopwords: StopWords,
        variant: EssayVariant,
    ) -> Self {
        let settings = generator.default_settings();
        Self {
            generator,
            stopwords,
            variant,
            settings,
            layout: ExportLayout::for_variant(variant),
            cloud: WordCloudOptions::default(),
            top_n: render::DEFAULT_TOP_N,
            event_sink: None,
        }
    }

    /// Build backend and stop words from configuration.
    pub fn from_config(config: &LectioConfig) -> Result<Self> {
        let generator: Arc<dyn TextGenerator> = Arc::from(provider::create_provider(config)?);
        let store = config
            .resource_dir()
            .map(|dir| ResourceStore::new(dir.to_path_buf()))
            .unwrap_or_else(ResourceStore::new_default);
        let stopwords = StopWords::load(&store, config.language())?;
        let sampling = config.sampling().clone();
        Ok(Self::new(generator, stopwords, config.variant()).with_settings(sampling))
    }

    /// Override sampling; unset fields keep their current value.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings.or(&self.settings);
        self
    }

    pub fn with_layout(mut self, layout: ExportLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_word_cloud(mut self, options: WordCloudOptions) -> Self {
        self.cloud = options;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_event_sink(mut self, sink: PipelineEventSink) -> Self {
        self.event_sink = Some(sink);
        self
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn variant(&self) -> EssayVariant {
        self.variant
    }

    /// Run once for `author` and `work`.
    pub async fn run(&self, author: &str, work: &str) -> Result<AnalysisReport> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "analysis_run",
            %run_id,
            provider = self.generator.provider_name(),
            variant = %self.variant
        );
        self.run_inner(run_id, author, work).instrument(span).await
    }

    async fn run_inner(&self, run_id: Uuid, author: &str, work: &str) -> Result<AnalysisReport> {
        self.emit(run_id, PipelineState::Idle, None);

        let request = prompt::build_request(author, work, self.variant);
        self.emit(run_id, PipelineState::Fetching, None);
        let essay = match generation::fetch_essay(
            self.generator.as_ref(),
            &request,
            &self.settings,
            prompt::required_words(self.variant),
        )
        .await
        {
            Ok(essay) => essay,
            Err(err) => return Err(self.fail(run_id, err)),
        };

        self.emit(run_id, PipelineState::Analyzing, None);
        let analysis = analysis::analyze(&essay.text, &self.stopwords);

        self.emit(run_id, PipelineState::Rendering, None);
        let report = match self.render(run_id, author, work, essay, analysis) {
            Ok(report) => report,
            Err(err) => return Err(self.fail(run_id, err)),
        };

        self.emit(run_id, PipelineState::Ready, None);
        Ok(report)
    }

    fn render(
        &self,
        run_id: Uuid,
        author: &str,
        work: &str,
        essay: Essay,
        analysis: Analysis,
    ) -> Result<AnalysisReport> {
        let word_cloud = render::render_word_cloud(&analysis.frequencies, &self.cloud)?;
        let frequency_plot = render::render_frequency_plot(&analysis.frequencies, self.top_n);
        let document = export::build_document(
            &essay.text,
            author,
            work,
            &analysis.frequencies,
            self.layout,
        )?;

        Ok(AnalysisReport {
            run_id,
            author: author.to_string(),
            work: work.to_string(),
            variant: self.variant,
            generated_at: Utc::now(),
            essay,
            analysis,
            word_cloud,
            frequency_plot,
            filename: export::suggested_filename(author, work),
            document,
        })
    }

    fn fail(&self, run_id: Uuid, err: LectioError) -> LectioError {
        warn!(error = %err, "run failed");
        self.emit(run_id, PipelineState::Failed, Some(err.to_string()));
        err
    }

    fn emit(&self, run_id: Uuid, state: PipelineState, error: Option<String>) {
        info!(%state, "pipeline state");
        if let Some(sink) = &self.event_sink {
            sink(PipelineEvent {
                run_id,
                state,
                at: Utc::now(),
                error,
            });
        }
    }
}
