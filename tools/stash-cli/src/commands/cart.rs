//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use stash_cache::KeyValueStore;
use stash_commerce::view::{CartPanel, ViewSync};
use stash_commerce::Storefront;

use super::{CartArgs, ClearArgs, ItemArgs};
use crate::context::Context;

/// Run the add command.
pub async fn add(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    shop.add_to_cart(&args.name)?;
    print_cart(&shop, ctx);
    Ok(())
}

/// Run the inc command.
pub async fn increment(args: ItemArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let quantity = match (&args.name, args.index) {
        (Some(name), _) => shop.cart_mut().increment_item(name)?,
        (None, Some(index)) => shop.cart_mut().increment(index)?,
        (None, None) => bail!("Pass a product name or --index"),
    };
    ctx.output.debug(&format!("Quantity now {}", quantity));
    print_cart(&shop, ctx);
    Ok(())
}

/// Run the dec command.
pub async fn decrement(args: ItemArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let quantity = match (&args.name, args.index) {
        (Some(name), _) => shop.cart_mut().decrement_item(name)?,
        (None, Some(index)) => shop.cart_mut().decrement(index)?,
        (None, None) => bail!("Pass a product name or --index"),
    };
    if quantity == 0 {
        ctx.output.info("Line removed");
    }
    print_cart(&shop, ctx);
    Ok(())
}

/// Run the remove command.
pub async fn remove(args: ItemArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let item = match (&args.name, args.index) {
        (Some(name), _) => shop.cart_mut().remove_item(name)?,
        (None, Some(index)) => shop.cart_mut().remove(index)?,
        (None, None) => bail!("Pass a product name or --index"),
    };
    ctx.output.success(&format!("Removed {}", item.name));
    print_cart(&shop, ctx);
    Ok(())
}

/// Run the clear command.
pub async fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    if shop.cart().cart().is_empty() {
        print_cart(&shop, ctx);
        return Ok(());
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from your stash?", shop.cart().count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left as is");
            return Ok(());
        }
    }

    shop.cart_mut().clear();
    print_cart(&shop, ctx);
    Ok(())
}

/// Run the cart command.
pub async fn show(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    print_cart(&shop, ctx);
    Ok(())
}

/// Print the badge and cart panel as the views currently hold them.
pub fn print_cart<S: KeyValueStore>(shop: &Storefront<S>, ctx: &Context) {
    let views = shop.views();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "badge": views.badge(),
            "panel": views.panel(),
        }));
        return;
    }

    render_panel(&views, ctx);
}

fn render_panel(views: &ViewSync, ctx: &Context) {
    let badge = views.badge();
    if badge.visible {
        ctx.output.header(&format!("Your stash ({})", badge.count));
    } else {
        ctx.output.header("Your stash");
    }

    match views.panel() {
        CartPanel::Empty { message } => ctx.output.info(message),
        CartPanel::Items {
            rows, total_label, ..
        } => {
            let widths = [4, 24, 12, 4];
            ctx.output.table_row(&["#", "NAME", "PRICE", "QTY"], &widths);
            for (index, row) in rows.iter().enumerate() {
                ctx.output.table_row(
                    &[
                        &index.to_string(),
                        &row.name,
                        &row.price_label,
                        &row.quantity.to_string(),
                    ],
                    &widths,
                );
            }
            ctx.output.kv("Total", total_label);
        }
    }
}
