use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use destination_ranker::config::parse_products;
use destination_ranker::{
    DateRange, DestinationRanker, Dimension, FileAnalyticsSource, HttpCatalogSource, Market,
    RankerConfig,
};
use log::info;

#[derive(Parser, Debug)]
#[command(
    name = "destination-ranker",
    version,
    about = "Rank destinations of a market by page views"
)]
struct Cli {
    /// Two-letter market code, e.g. `de`
    market: String,
    /// JSON export of the page view report
    #[arg(long)]
    analytics_export: PathBuf,
    /// Comma separated products (defaults to RANKER_PRODUCTS or lt,ils,aya,upa)
    #[arg(long)]
    products: Option<String>,
    /// First day of the reporting window (YYYY-MM-DD)
    #[arg(long, requires = "end_date")]
    start_date: Option<NaiveDate>,
    /// Last day of the reporting window (YYYY-MM-DD)
    #[arg(long, requires = "start_date")]
    end_date: Option<NaiveDate>,
    /// Report dimension: page-path or destination-code
    #[arg(long)]
    dimension: Option<Dimension>,
    /// Override for the catalog API base URL
    #[arg(long)]
    catalog_url: Option<String>,
    /// Only rows with more views than this are reported
    #[arg(long)]
    min_page_views: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = RankerConfig::from_env().context("Invalid environment configuration")?;
    if let Some(url) = cli.catalog_url {
        config.catalog_base_url = url;
    }
    if let Some(dimension) = cli.dimension {
        config.dimension = dimension;
    }
    if let Some(views) = cli.min_page_views {
        config.min_page_views = views;
    }

    let market = Market::new(&cli.market)?;
    let products = cli.products.as_deref().map(parse_products).transpose()?;
    let date_range = match (cli.start_date, cli.end_date) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
        (None, None) => None,
        _ => bail!("--start-date and --end-date must be given together"),
    };

    let catalog = HttpCatalogSource::new(&config.catalog_base_url, config.request_timeout)?;
    let analytics = FileAnalyticsSource::new(cli.analytics_export);
    let ranker = DestinationRanker::new(catalog, analytics, config);

    let ranked = ranker
        .ranked_destinations(&market, products.as_deref(), date_range)
        .await
        .with_context(|| format!("Ranking destinations for market {market} failed"))?;

    info!("Ranked {} destinations", ranked.len());
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}
