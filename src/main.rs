use anyhow::Result;
use arcana::app::state::ViewState;
use arcana::catalog::Catalog;
use arcana::query::{self, Filter};
use arcana::util::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "arcana", version, about = "TUI storefront for Livraria Arcana")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,

    /// Print the matching catalog records as JSON and exit
    #[arg(short, long)]
    list: bool,

    /// Category filter token used with --list
    #[arg(short, long, requires = "list")]
    filter: Option<String>,

    /// Search text used with --list
    #[arg(short, long, requires = "list")]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("arcana starting");

    if cli.list {
        let view = ViewState {
            filter: Filter::from_token(cli.filter.as_deref()),
            query: cli.query.unwrap_or_default(),
        };
        let books = query::visible_books(&Catalog::default(), &view);
        info!(count = books.len(), "Listing catalog");
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    // Run the TUI event loop
    arcana::app::event_loop::run(config).await
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "arcana.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("arcana=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
