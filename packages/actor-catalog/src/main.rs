//! Actor Catalog CLI
//!
//! Scrapes a provider's listing page into an in-memory catalog and prints
//! the extraction report and one page of the resulting listing as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use actor_catalog::{
    ActorSummary, AppConfig, Catalog, DocumentFetcher, ExtractionEngine, ExtractionReport,
    FileFetcher, ListQuery, MemoryStore, ProviderRegistry, ProviderSource, RankPolicy, Rank,
};

#[derive(Parser)]
#[command(name = "actor-catalog", about = "Scrape ranked actor listings into a catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List configured providers
    Providers,

    /// Scrape a provider and print the resulting catalog page as JSON
    Scrape {
        /// Provider name (case-insensitive)
        provider: String,

        /// Read the listing from a saved HTML file instead of the network
        #[arg(long)]
        html: Option<PathBuf>,

        /// Skip records with non-positive or duplicate ranks
        #[arg(long)]
        skip_conflicts: bool,

        /// Case-sensitive name substring
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        min_rank: Option<Rank>,

        #[arg(long)]
        max_rank: Option<Rank>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Defaults to ACTOR_PAGE_SIZE
        #[arg(long)]
        page_size: Option<usize>,
    },
}

#[derive(Serialize)]
struct ListingOutput {
    total_actors: usize,
    total_pages: usize,
    actors: Vec<ActorSummary>,
}

#[derive(Serialize)]
struct ScrapeOutput {
    report: ExtractionReport,
    listing: ListingOutput,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actor_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let providers = config
        .load_providers()
        .context("Failed to load provider definitions")?;
    tracing::info!(providers = providers.len(), "Configuration loaded");

    match cli.command {
        Command::Providers => {
            for name in providers.provider_names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Scrape {
            provider,
            html,
            skip_conflicts,
            name,
            min_rank,
            max_rank,
            page,
            page_size,
        } => {
            let policy = if skip_conflicts {
                RankPolicy::SkipConflicts
            } else {
                RankPolicy::Permissive
            };

            let mut query = ListQuery::new()
                .page(page)
                .page_size(page_size.unwrap_or(config.page_size));
            query.name_filter = name;
            query.min_rank = min_rank;
            query.max_rank = max_rank;

            let catalog = Arc::new(Catalog::new(MemoryStore::new()));

            let report = match html {
                Some(path) => {
                    // Point the provider at the saved file; unknown providers stay unknown.
                    let registry = match providers.resolve(&provider) {
                        Some(mut provider_config) => {
                            provider_config.listing_url = path.display().to_string();
                            ProviderRegistry::new().with_provider(&provider, provider_config)
                        }
                        None => ProviderRegistry::new(),
                    };
                    scrape(FileFetcher::new(), registry, &catalog, &provider, policy).await?
                }
                None => {
                    let fetcher = config
                        .http_fetcher()
                        .context("Failed to build HTTP client")?;
                    scrape(fetcher, providers, &catalog, &provider, policy).await?
                }
            };

            let page = catalog
                .list(&query)
                .await
                .context("Failed to list catalog")?;

            let output = ScrapeOutput {
                report,
                listing: ListingOutput {
                    total_actors: page.total_count,
                    total_pages: page.total_pages,
                    actors: page.summaries(),
                },
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
    }
}

async fn scrape<F: DocumentFetcher>(
    fetcher: F,
    providers: ProviderRegistry,
    catalog: &Arc<Catalog<MemoryStore>>,
    provider: &str,
    policy: RankPolicy,
) -> Result<ExtractionReport> {
    ExtractionEngine::new(fetcher, providers, catalog.clone())
        .with_rank_policy(policy)
        .extract_all(provider)
        .await
        .with_context(|| format!("Failed to scrape provider {provider}"))
}
