//! Lectio CLI binary entry point.

use std::sync::Arc;

use lectio::cli::{AnalyzeArgs, Cli, Commands, ResourcesArgs};
use lectio::config::LectioConfig;
use lectio::error::LectioError;
use lectio::pipeline::{Pipeline, PipelineEvent, PipelineState};
use lectio::resources::{self, ResourceStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lectio=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    let result = match cli.load_config() {
        Ok(config) => match &cli.command {
            Commands::Analyze(args) => handle_analyze(args, config).await,
            Commands::Resources(args) => handle_resources(args, &config),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        eprintln!("Hint: {}", e.recovery_suggestion().hint());
        std::process::exit(1);
    }
}

fn resource_store(config: &LectioConfig) -> ResourceStore {
    config
        .resource_dir()
        .map(|dir| ResourceStore::new(dir.to_path_buf()))
        .unwrap_or_else(ResourceStore::new_default)
}

async fn handle_analyze(args: &AnalyzeArgs, config: LectioConfig) -> Result<(), LectioError> {
    let config = args.apply(config);
    resources::prepare(&resource_store(&config))?;

    let sink = Arc::new(|event: PipelineEvent| match event.state {
        PipelineState::Fetching => eprintln!("Generando análisis..."),
        PipelineState::Failed => {
            eprintln!("❌ {}", event.error.unwrap_or_default());
        }
        _ => {}
    });
    let pipeline = Pipeline::from_config(&config)?.with_event_sink(sink);
    let report = pipeline.run(&args.author, &args.work).await?;

    if let Some(warning) = &report.essay.warning {
        eprintln!("⚠ {warning}");
    }

    println!("Ensayo Generado\n");
    println!("{}\n", report.preview());
    println!("Palabras más frecuentes");
    for (word, count) in report.top_tokens() {
        println!("  {word}: {count} ocurrencias");
    }

    for path in report.write_artifacts(&args.out_dir)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn handle_resources(args: &ResourcesArgs, config: &LectioConfig) -> Result<(), LectioError> {
    let store = match &args.dir {
        Some(dir) => ResourceStore::new(dir.clone()),
        None => resource_store(config),
    };
    for path in store.ensure_all()? {
        println!("{}", path.display());
    }
    Ok(())
}
