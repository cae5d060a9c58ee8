//! Storedash CLI - dashboard views over a content store export.
//!
//! # Usage
//!
//! ```bash
//! # Check that every document in an export decodes
//! storedash --export data/export.ndjson validate
//!
//! # Shipped orders mentioning "jam", highest total last
//! storedash --export data/export.ndjson orders --search jam --status shipped --sort total
//!
//! # Monthly sales trend
//! storedash --export data/export.ndjson trend --granularity month
//! ```
//!
//! # Commands
//!
//! - `orders` - Order table with status summary
//! - `products` - Product list
//! - `reviews` - Review cards with rating summary
//! - `trend` - Orders and sales per period
//! - `summary` - Order counts by status
//! - `overview` - Full analytics overview
//! - `validate` - Decode the export and report document counts
//!
//! Output is pretty-printed JSON on stdout. Diagnostics go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storedash_admin::views::{ViewParams, ViewQuery};

mod commands;

#[derive(Parser)]
#[command(name = "storedash")]
#[command(author, version, about = "Storedash dashboard views")]
struct Cli {
    /// NDJSON export of the content store
    #[arg(short, long, env = "STOREDASH_EXPORT_PATH")]
    export: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order table with status summary
    Orders(ViewArgs),
    /// Product list
    Products(ViewArgs),
    /// Review cards with rating summary
    Reviews(ViewArgs),
    /// Orders and sales per calendar period
    Trend(PeriodArgs),
    /// Order counts by status
    Summary,
    /// Full analytics overview
    Overview(PeriodArgs),
    /// Decode every document and report counts
    Validate,
}

/// Options shared by the list views, mirroring the API query parameters.
#[derive(Debug, Args)]
struct ViewArgs {
    /// Case-insensitive search term
    #[arg(short, long)]
    search: Option<String>,

    /// Exact status filter (orders only)
    #[arg(long)]
    status: Option<String>,

    /// Sort key (`createdAt`, `total`, `orderNumber`, ...)
    #[arg(long)]
    sort: Option<String>,
}

#[derive(Debug, Args)]
struct PeriodArgs {
    /// `day`, `month` or `year`
    #[arg(short, long, default_value = "month")]
    granularity: String,
}

impl TryFrom<ViewArgs> for ViewParams {
    type Error = storedash_admin::views::ParamError;

    fn try_from(args: ViewArgs) -> Result<Self, Self::Error> {
        Self::try_from(ViewQuery {
            search: args.search,
            status: args.status,
            sort: args.sort,
            granularity: None,
        })
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing on stderr so stdout carries only JSON
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storedash=info,storedash_admin=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let export = cli.export.as_path();
    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Orders(args) => commands::screens::orders(export, args.try_into()?, &mut out).await?,
        Commands::Products(args) => {
            commands::screens::products(export, args.try_into()?, &mut out).await?;
        }
        Commands::Reviews(args) => commands::screens::reviews(export, args.try_into()?, &mut out).await?,
        Commands::Trend(args) => commands::analytics::trend(export, &args.granularity, &mut out).await?,
        Commands::Summary => commands::analytics::summary(export, &mut out).await?,
        Commands::Overview(args) => {
            commands::analytics::overview(export, &args.granularity, &mut out).await?;
        }
        Commands::Validate => commands::validate::run(export, &mut out).await?,
    }
    Ok(())
}
