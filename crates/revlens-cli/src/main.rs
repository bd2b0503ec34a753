mod files;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use revlens_core::{load_app_config, load_catalog, AppConfig, Catalog};
use revlens_sentiment::TitleSearch;
use revlens_store::ReviewStore;
use tracing_subscriber::EnvFilter;

use crate::files::{ResultsFile, TitlesFile};

#[derive(Debug, Parser)]
#[command(name = "revlens")]
#[command(about = "Collect product reviews and summarize their sentiment")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Save search results for a product as collected reviews
    Collect {
        /// Product the results were searched for
        #[arg(long)]
        product: String,

        /// JSON file of `{url, snippet}` search results
        #[arg(long)]
        results: PathBuf,

        /// Maximum results to consider (defaults to `REVLENS_MAX_RESULTS`)
        #[arg(long)]
        max_results: Option<usize>,
    },
    /// Classify collected reviews and store the analyzed rows
    Analyze {
        /// Restrict analysis to one product (case-insensitive)
        #[arg(long)]
        product: Option<String>,

        /// JSON file of shop search results used to find a buy link
        #[arg(long)]
        buy_results: Option<PathBuf>,
    },
    /// List trending product names
    Trending {
        /// JSON file of search-result titles
        #[arg(long)]
        titles: Option<PathBuf>,

        /// Number of names to return (defaults to `REVLENS_TRENDING_LIMIT`)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Pick one trending product at random, then collect and analyze it
    Random {
        /// JSON file of search-result titles
        #[arg(long)]
        titles: Option<PathBuf>,

        /// JSON file of review search results for the picked product
        #[arg(long)]
        results: Option<PathBuf>,

        /// JSON file of shop search results used to find a buy link
        #[arg(long)]
        buy_results: Option<PathBuf>,
    },
    /// Show the most recently analyzed product
    History {
        /// JSON file of shop search results used to find a buy link
        #[arg(long)]
        buy_results: Option<PathBuf>,
    },
    /// Generate a markdown report of analyzed reviews
    Report {
        /// Filter to a specific product (case-insensitive)
        #[arg(long)]
        product: Option<String>,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_catalog_for(config: &AppConfig) -> anyhow::Result<Catalog> {
    match &config.catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(Catalog::default()),
    }
}

fn trending_for(
    titles: Option<PathBuf>,
    store: &ReviewStore,
    catalog: &Catalog,
    limit: usize,
) -> Vec<String> {
    let source = titles.map(TitlesFile::new);
    let source = source.as_ref().map(|s| s as &dyn TitleSearch);
    revlens_sentiment::trending_products(source, store, catalog, limit)
}

/// Print the buy link for `product` when a shop results file was given.
fn show_buy_link(buy_results: Option<PathBuf>, product: &str) {
    if let Some(path) = buy_results {
        let link = revlens_sentiment::buy_link(&ResultsFile::new(path), product);
        report::print_buy_link(link.as_deref());
    }
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let catalog = load_catalog_for(config)?;
    let store = ReviewStore::from_config(config);

    match cli.command {
        Some(Commands::Collect {
            product,
            results,
            max_results,
        }) => {
            let search = ResultsFile::new(results);
            let summary = revlens_sentiment::fetch_and_save_reviews(
                &search,
                &store,
                &catalog,
                &product,
                max_results.unwrap_or(config.max_results),
            )?;
            println!(
                "collected {} trusted results for '{}': {} saved, {} already stored",
                summary.total_found,
                product.trim(),
                summary.saved,
                summary.skipped
            );
        }
        Some(Commands::Analyze {
            product,
            buy_results,
        }) => {
            let analysis = revlens_sentiment::analyze_reviews(&store, product.as_deref())?;
            report::print_analysis(&analysis, product.as_deref());
            if let Some(product) = product.as_deref().filter(|p| !p.trim().is_empty()) {
                show_buy_link(buy_results, product);
            }
        }
        Some(Commands::Trending { titles, limit }) => {
            let limit = limit.unwrap_or(config.trending_limit);
            if limit == 0 {
                anyhow::bail!("--limit must be at least 1");
            }
            for (rank, name) in trending_for(titles, &store, &catalog, limit)
                .iter()
                .enumerate()
            {
                println!("{:>2}. {name}", rank + 1);
            }
        }
        Some(Commands::Random {
            titles,
            results,
            buy_results,
        }) => {
            let products = trending_for(titles, &store, &catalog, config.trending_limit);
            let Some(product) = revlens_sentiment::pick_random(&products, &mut rand::rng())
            else {
                println!("no trending products available");
                return Ok(());
            };
            println!("Random pick: {product}");
            show_buy_link(buy_results, product);

            if let Some(results) = results {
                let search = ResultsFile::new(results);
                revlens_sentiment::fetch_and_save_reviews(
                    &search,
                    &store,
                    &catalog,
                    product,
                    config.max_results,
                )?;
                let analysis = revlens_sentiment::analyze_reviews(&store, Some(product))?;
                println!();
                report::print_analysis(&analysis, Some(product));
            }
        }
        Some(Commands::History { buy_results }) => {
            let entry = revlens_sentiment::latest_analysis(&store)?;
            report::print_history(entry.as_ref());
            if let Some(entry) = &entry {
                show_buy_link(buy_results, &entry.product);
            }
        }
        Some(Commands::Report { product }) => {
            let filter = product
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(str::to_lowercase);
            let rows: Vec<_> = store
                .load_analyzed()?
                .into_iter()
                .filter(|r| {
                    filter
                        .as_deref()
                        .is_none_or(|f| r.product.to_lowercase() == f)
                })
                .collect();
            if rows.is_empty() {
                println!("no analyzed reviews to report; run `analyze` first");
                return Ok(());
            }
            print!("{}", report::render_markdown(&rows, product.as_deref()));
        }
        None => println!("revlens ready; run `revlens --help` for commands"),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // `--help` and usage errors must not depend on configuration.
    let cli = Cli::parse();

    let config = load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(env = %config.env, data_dir = %config.data_dir.display(), "configuration loaded");

    run(cli, &config)
}
