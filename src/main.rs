use std::io;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use musicsearch::api::{AppState, create_router};
use musicsearch::config::Config;
use musicsearch::itunes::ItunesClient;
use musicsearch::repl::repl;
use musicsearch::search::run_search;

#[derive(Parser, Debug)]
#[command(name = "musicsearch", about = "Search the iTunes catalog for albums")]
struct Cli {
    /// Search endpoint, overrides MUSICSEARCH_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds, overrides MUSICSEARCH_TIMEOUT_SECS
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single search and print the results
    Search {
        term: String,
        /// Number of results, or "all"
        #[arg(short, long)]
        limit: Option<String>,
        #[arg(short, long)]
        entity: Option<String>,
    },
    /// Read search terms from stdin until EOF or "quit"
    Repl {
        #[arg(short, long)]
        limit: Option<String>,
    },
    /// Serve the JSON search API
    Serve {
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = std::time::Duration::from_secs(secs);
    }

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    // Bridge log crate -> tracing (so log::info! etc. work)
    tracing_log::LogTracer::init()?;

    let client = ItunesClient::from_config(&config)?;

    match cli.command {
        Command::Search {
            term,
            limit,
            entity,
        } => {
            let limit = limit.unwrap_or_else(|| config.default_limit.to_string());
            let entity = entity
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| config.entity.clone());
            let outcome = run_search(&client, &term, Some(&limit), Some(&entity)).await?;
            for line in outcome.lines {
                println!("{line}");
            }
        }
        Command::Repl { limit } => {
            let limit = limit.unwrap_or_else(|| config.default_limit.to_string());
            let stdin = io::stdin();
            repl(&client, stdin.lock(), io::stdout(), &limit, &config.entity).await?;
        }
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_addr);
            let app = create_router(AppState::new(client, config.entity.clone()));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            log::info!("serving search API on http://{addr}");
            axum::serve(listener, app).await?;
        }
    }
    Ok(())
}
