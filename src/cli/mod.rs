//! Command-line interface for Lectio.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::LectioConfig;
use crate::error::Result;
use crate::provider::Backend;
use crate::resources::Language;
use crate::types::{EssayVariant, GenerationSettings};

/// Lectio CLI
#[derive(Parser, Debug)]
#[command(
    name = "lectio",
    version,
    about = "Generate a literary essay, chart its vocabulary and export it to Word"
)]
pub struct Cli {
    /// Config file (defaults to ./lectio.toml, then ~/.lectio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate and analyze an essay
    Analyze(AnalyzeArgs),
    /// Install stop-word lists into the resource directory
    Resources(ResourcesArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Author name
    #[arg(short, long, default_value = "Gabriel García Márquez")]
    pub author: String,

    /// Title of the work
    #[arg(short, long, default_value = "Cien años de soledad")]
    pub work: String,

    /// Essay shape (single, sectioned)
    #[arg(long)]
    pub variant: Option<EssayVariant>,

    /// Generation backend (openai, google)
    #[arg(short, long)]
    pub backend: Option<Backend>,

    /// Model id for the backend
    #[arg(short, long)]
    pub model: Option<String>,

    /// Essay language for stop words (spanish, english)
    #[arg(long)]
    pub language: Option<Language>,

    /// Temperature
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Max output tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Directory for the images and the document
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Arguments for the `resources` subcommand.
#[derive(Parser, Debug)]
pub struct ResourcesArgs {
    /// Resource directory (defaults to ~/.lectio/resources)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load configuration layers, honoring `--config`.
    pub fn load_config(&self) -> Result<LectioConfig> {
        match &self.config {
            Some(path) => {
                let _ = dotenvy::dotenv();
                LectioConfig::from_file(path)?.apply_env()
            }
            None => LectioConfig::load(),
        }
    }
}

impl AnalyzeArgs {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: LectioConfig) -> LectioConfig {
        if let Some(variant) = self.variant {
            config = config.with_variant(variant);
        }
        if let Some(backend) = self.backend {
            config = config.with_backend(backend);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(language) = self.language {
            config = config.with_language(language);
        }
        config.with_sampling(GenerationSettings {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            ..Default::default()
        })
    }
}
