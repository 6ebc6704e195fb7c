//! pothos-locate: print where a Pothos schema symbol is declared.

use anyhow::{bail, Context};
use clap::Parser;
use pothos_locate::config::DEFAULT_EXTENSIONS;
use pothos_locate::extractors::DEFAULT_RECEIVER;
use pothos_locate::{locate, project, resolver, LocateConfig, LocationCache};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "pothos_locate=warn";

#[derive(Debug, Parser)]
#[command(
    name = "pothos-locate",
    about = "Find the source location of a Pothos GraphQL type or field"
)]
#[command(version)]
struct Cli {
    /// Project label passed by editor integrations (informational)
    #[arg(default_value = "")]
    project: String,

    /// Symbol to resolve, e.g. `User.displayName` or `Query.maps`
    #[arg(default_value = "")]
    symbol: String,

    /// Directory to scan, relative to the current directory
    #[arg(long)]
    src: Option<PathBuf>,

    /// Comma separated file extensions to scan
    #[arg(long, default_value = DEFAULT_EXTENSIONS)]
    extensions: String,

    /// Ignore the location cache and re-index every file
    #[arg(long)]
    no_cache: bool,

    /// Identifier the schema builder is bound to
    #[arg(long = "builderName", alias = "builder-name", default_value = DEFAULT_RECEIVER)]
    builder_name: String,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the result line; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    require_symbol(&cli.symbol)?;
    tracing::debug!("Resolving '{}' for project '{}'", cli.symbol, cli.project);

    let root = std::env::current_dir().context("Failed to read the current directory")?;
    let mut config = LocateConfig::new(&root, cli.symbol)
        .with_extensions(&cli.extensions)
        .with_force_rebuild(cli.no_cache)
        .with_receiver(&cli.builder_name);
    if let Some(src) = cli.src {
        config = config.with_source_dir(src);
    }

    let cache_file = project::cache_file_path(&root)?;
    let outcome = locate(&config, &LocationCache::new(cache_file))?;

    let stdout = std::io::stdout();
    resolver::write_resolution(&mut stdout.lock(), outcome.location.as_ref())
        .context("Failed to write result")?;
    Ok(())
}

/// `RUST_LOG` directives when set and valid, `pothos_locate=warn` otherwise
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn require_symbol(symbol: &str) -> anyhow::Result<()> {
    if symbol.trim().is_empty() {
        bail!(
            "Please provide a GraphQL type as the second argument: 'pothos-locate <projectName> User.displayName'."
        );
    }
    Ok(())
}
