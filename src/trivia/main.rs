use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use trivia::api::TriviaApi;
use trivia::config::TriviaConfig;
use trivia::error::{Result, TriviaError};
use trivia::server;
use trivia::store::fs::FileStore;
use trivia::store::seed::{seed_store, SeedOutcome};

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trivia=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;

    match cli.command {
        Some(Commands::Seed { force }) => handle_seed(&data_dir, force),
        Some(Commands::Serve {
            bind,
            page_size,
            seed,
        }) => handle_serve(&data_dir, bind, page_size, seed).await,
        None => handle_serve(&data_dir, None, None, None).await,
    }
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "trivia", "trivia")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TriviaError::Internal("could not determine a data directory".into()))
}

async fn handle_serve(
    data_dir: &Path,
    bind: Option<String>,
    page_size: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let config = TriviaConfig::load(data_dir)?.with_overrides(bind, page_size, seed);
    let store = FileStore::new(data_dir);
    if !store.has_data() {
        tracing::warn!(
            "No data in {}; run `trivia seed` to load the sample catalog",
            data_dir.display()
        );
    }

    let mut api = TriviaApi::new(store).with_page_size(config.page_size);
    if let Some(seed) = config.quiz_seed {
        api = api.with_seed(seed);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git = env!("TRIVIA_GIT_HASH"),
        data_dir = %data_dir.display(),
        page_size = config.page_size,
        "starting trivia server"
    );
    server::serve(api, &config.bind).await
}

fn handle_seed(data_dir: &Path, force: bool) -> Result<()> {
    let mut store = FileStore::new(data_dir);
    match seed_store(&mut store, force)? {
        SeedOutcome::Written {
            categories,
            questions,
        } => {
            // Writes the effective settings so they can be edited in place.
            TriviaConfig::load(data_dir)?.save(data_dir)?;
            tracing::info!(categories, questions, "sample catalog written");
            println!(
                "Seeded {} categories and {} questions into {}",
                categories,
                questions,
                data_dir.display()
            );
        }
        SeedOutcome::SkippedExisting => {
            println!(
                "{} already has trivia data; use --force to overwrite",
                data_dir.display()
            );
        }
    }
    Ok(())
}
