//! Catalog listing commands.

use anyhow::Result;
use stash_commerce::catalog::Product;
use stash_commerce::search::SortKey;

use super::{BrowseArgs, CatalogArgs};
use crate::context::Context;

/// Run the catalog command.
pub async fn list(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let catalog = catalog.with_trending(ctx.storefront_config().catalog.trending.iter().cloned());

    let products: Vec<&Product> = catalog
        .iter()
        .filter(|p| !args.trending || catalog.is_trending(&p.name))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Catalog ({} products)", products.len()));
    ctx.output
        .products(&products, ctx.currency(), |name| catalog.is_trending(name));
    Ok(())
}

/// Run the browse command.
pub async fn browse(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let sort = SortKey::parse(&args.sort);
    let requested = args.sort.trim();
    if sort == SortKey::None && !requested.is_empty() && !requested.eq_ignore_ascii_case("none") {
        ctx.output
            .warn(&format!("Unknown sort '{}', keeping catalog order", args.sort));
    }

    let products = shop.browse(&args.category, sort);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = if args.category.is_empty() {
        "All products".to_string()
    } else {
        format!("Category: {}", args.category)
    };
    ctx.output
        .header(&format!("{} ({})", title, sort.display_name()));
    ctx.output
        .products(&products, ctx.currency(), |name| shop.catalog().is_trending(name));
    Ok(())
}
