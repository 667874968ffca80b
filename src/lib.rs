//! Lectio: literary essay generation and vocabulary analysis
//!
//! Builds an essay prompt for an author and a work, fetches the essay from a
//! text-generation backend, counts its vocabulary, renders a word cloud and a
//! frequency plot, and exports everything to a `.docx` document.
//!
//! # Quick Start
//!
//! ```no_run
//! use lectio::config::LectioConfig;
//! use lectio::pipeline::Pipeline;
//!
//! # async fn example() -> lectio::error::Result<()> {
//! let config = LectioConfig::load()?;
//! let report = Pipeline::from_config(&config)?
//!     .run("Gabriel García Márquez", "Cien años de soledad")
//!     .await?;
//! println!("{}", report.preview());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod pipeline;
pub mod prelude;
pub mod prompt;
pub mod provider;
pub mod report;
pub mod resources;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
