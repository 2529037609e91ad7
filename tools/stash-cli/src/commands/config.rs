//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::CliConfig;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let storefront = &ctx.config.storefront;
    ctx.output.kv("storage_key", &storefront.storage_key);
    ctx.output.kv("currency", &storefront.currency);

    // Paths section
    ctx.output.info("");
    ctx.output.info("[paths]");
    ctx.output
        .kv("catalog", &ctx.catalog_path.display().to_string());
    ctx.output.kv("data_dir", &ctx.data_dir.display().to_string());

    // Search section
    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output
        .kv("debounce_ms", &storefront.search.debounce_ms.to_string());
    ctx.output
        .kv("min_query_len", &storefront.search.min_query_len.to_string());

    // Catalog section
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output
        .kv("fallback_section", &storefront.catalog.fallback_section);
    ctx.output
        .kv("trending", &storefront.catalog.trending.join(", "));
    for group in &storefront.catalog.groups {
        ctx.output.list_item(&format!(
            "{} -> #{} ({})",
            group.selector,
            group.section,
            group.members.join(", ")
        ));
    }

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = ctx.config.get(key)?;
    if ctx.output.is_json() {
        ctx.output.json(&value);
    } else {
        match value {
            serde_json::Value::String(s) => println!("{}", s),
            other => println!("{}", other),
        }
    }
    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.base_dir.join("stash.toml");

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    CliConfig::default().save(&path)?;
    ctx.output
        .success(&format!("Created {}", path.display()));
    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        ctx.output.warn("No config file found, using defaults");
        return Ok(());
    };

    CliConfig::load(&path.to_string_lossy())?;
    ctx.output
        .success(&format!("{} is valid", path.display()));
    Ok(())
}
