use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sitelook::api::create_router;
use sitelook::config::CONFIG;
use sitelook::service::{HtmlExtractor, PageExtractor, SearchService};

#[derive(Parser)]
#[command(name = "sitelook", version, about = "Lightweight front end for web search results")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the search API server
    Serve {
        /// Address to listen on, overrides SITELOOK_BIND_ADDR
        #[arg(long)]
        addr: Option<String>,
    },
    /// Extract a saved result page and print it as JSON
    Parse {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = PageKind::All)]
        kind: PageKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageKind {
    All,
    Images,
    Videos,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    match Cli::parse().command {
        Command::Serve { addr } => serve(addr.unwrap_or_else(|| CONFIG.bind_addr.clone())).await,
        Command::Parse { file, kind } => parse(&file, kind),
    }
}

async fn serve(addr: String) -> Result<()> {
    let service = Arc::new(SearchService::from_config(&CONFIG)?);
    let router = create_router(service, &CONFIG.static_dir);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

fn parse(file: &Path, kind: PageKind) -> Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let extractor = HtmlExtractor;
    let json = match kind {
        PageKind::All => serde_json::to_string_pretty(&extractor.search_page(&html)?)?,
        PageKind::Images => serde_json::to_string_pretty(&extractor.images_page(&html)?)?,
        PageKind::Videos => serde_json::to_string_pretty(&extractor.videos_page(&html)?)?,
    };
    println!("{json}");
    Ok(())
}
