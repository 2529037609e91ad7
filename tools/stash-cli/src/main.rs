//! Stash CLI - Command line storefront for the stash shop.
//!
//! Commands:
//! - `stash catalog` - List the catalog
//! - `stash browse` - List a category, optionally sorted by price
//! - `stash search` - Search products by name
//! - `stash add` / `inc` / `dec` / `remove` / `clear` - Change the cart
//! - `stash cart` - Show the cart panel
//! - `stash summary` - Show the checkout summary
//! - `stash checkout` - Place a (simulated) order
//! - `stash config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    BrowseArgs, CartArgs, CatalogArgs, CheckoutArgs, ClearArgs, ConfigArgs, ItemArgs, SearchArgs,
};

/// Stash CLI - Browse the catalog and manage your stash
#[derive(Parser)]
#[command(name = "stash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file (JSON array of rendered product entries)
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Directory holding the persisted cart
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product in the catalog
    Catalog(CatalogArgs),

    /// List products in a category
    Browse(BrowseArgs),

    /// Search products by name
    Search(SearchArgs),

    /// Add a product to the cart
    Add(CartArgs),

    /// Increase a cart line's quantity by one
    Inc(ItemArgs),

    /// Decrease a cart line's quantity by one
    Dec(ItemArgs),

    /// Remove a cart line
    Remove(ItemArgs),

    /// Empty the cart
    Clear(ClearArgs),

    /// Show the cart
    Cart,

    /// Show the checkout summary
    Summary,

    /// Place the order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "stash=debug,stash_commerce=debug,stash_cache=debug"
    } else {
        "stash=info,stash_commerce=info,stash_cache=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr so JSON output on stdout stays parseable
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        cli.data_dir.as_deref(),
        output,
    )?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::list(args, &ctx).await,
        Commands::Browse(args) => commands::catalog::browse(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Inc(args) => commands::cart::increment(args, &ctx).await,
        Commands::Dec(args) => commands::cart::decrement(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Clear(args) => commands::cart::clear(args, &ctx).await,
        Commands::Cart => commands::cart::show(&ctx).await,
        Commands::Summary => commands::checkout::summary(&ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
