//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show trending products.
    #[arg(long)]
    pub trending: bool,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category or group selector (mens, womens, accessories, or a leaf category).
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Sort order: price-low, price-high, or none.
    #[arg(short, long, default_value = "none")]
    pub sort: String,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text.
    #[arg(required_unless_present = "interactive")]
    pub text: Option<String>,

    /// Read queries from stdin as you type, one per line.
    #[arg(short, long)]
    pub interactive: bool,

    /// Jump to the section of the Nth result (1-based).
    #[arg(long, conflicts_with = "interactive")]
    pub pick: Option<usize>,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct CartArgs {
    /// Product name.
    pub name: String,
}

/// Selects a cart line by product name or by position.
#[derive(Args)]
pub struct ItemArgs {
    /// Product name of the cart line.
    #[arg(required_unless_present = "index", conflicts_with = "index")]
    pub name: Option<String>,

    /// Zero-based position of the cart line.
    #[arg(long)]
    pub index: Option<usize>,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,

    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub card_number: String,

    /// Card expiry (MM/YY).
    #[arg(long, default_value = "")]
    pub card_expiry: String,

    #[arg(long, default_value = "")]
    pub card_cvc: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Write a config file with the defaults.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
