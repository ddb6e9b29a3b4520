//! breedctl - sub-breed lookups through a memoizing cache

mod handler;
mod reply;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dogbreeds::{BreedFetcher, DogApiConfig, DogApiFetcher, StaticCatalog, DEFAULT_BASE_URL};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::handler::LookupHandler;
use crate::reply::{Format, Reply};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Breeds to look up (read from stdin, one per line, when omitted)
    breeds: Vec<String>,

    /// Dog API base URL
    #[arg(long, env = "DOG_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "DOG_API_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// Answer from a JSON catalog file instead of the API
    #[arg(long, env = "BREEDCTL_CATALOG")]
    catalog: Option<PathBuf>,

    /// Print one JSON object per lookup
    #[arg(long)]
    json: bool,

    /// Print cache statistics after the last lookup
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let format = if args.json { Format::Json } else { Format::Text };

    info!("Starting breedctl v{}", env!("CARGO_PKG_VERSION"));

    let handler = LookupHandler::new(open_source(&args)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.breeds.is_empty() {
        run(io::stdin().lock(), &mut out, &handler, format)?;
    } else {
        for breed in &args.breeds {
            emit(&mut out, &handler.handle(breed), format)?;
        }
    }

    let stats = handler.stats();
    if args.stats {
        writeln!(out, "{}", stats.render(format)?)?;
    }
    info!(
        calls_made = stats.calls_made,
        hits = stats.hits,
        cached = stats.cached_breeds,
        "lookups finished"
    );

    Ok(())
}

fn open_source(args: &Args) -> Result<Box<dyn BreedFetcher>> {
    if let Some(path) = &args.catalog {
        let catalog = StaticCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?;
        info!("Catalog {} loaded ({} breeds)", path.display(), catalog.len());
        return Ok(Box::new(catalog));
    }

    let fetcher = DogApiFetcher::with_config(DogApiConfig {
        base_url: args.base_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    })
    .context("Failed to create dog API client")?;
    info!("Using dog API at {}", fetcher.base_url());
    Ok(Box::new(fetcher))
}

/// Look up one breed per input line; blank lines are skipped and failed
/// lookups are reported without stopping the loop.
fn run<F: BreedFetcher>(
    input: impl BufRead,
    out: &mut impl Write,
    handler: &LookupHandler<F>,
    format: Format,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read breed from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        emit(out, &handler.handle(&line), format)?;
    }
    Ok(())
}

fn emit(out: &mut impl Write, reply: &Reply, format: Format) -> Result<()> {
    writeln!(out, "{}", reply.render(format)?)?;
    out.flush()?;
    Ok(())
}
