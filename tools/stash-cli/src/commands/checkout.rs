//! Checkout commands.

use anyhow::Result;
use stash_commerce::checkout::CheckoutForm;
use stash_commerce::view::CheckoutSummary;

use super::CheckoutArgs;
use crate::context::Context;

impl From<CheckoutArgs> for CheckoutForm {
    fn from(args: CheckoutArgs) -> Self {
        CheckoutForm {
            full_name: args.full_name,
            address: args.address,
            city: args.city,
            phone: args.phone,
            card_number: args.card_number,
            card_expiry: args.card_expiry,
            card_cvc: args.card_cvc,
        }
    }
}

/// Run the summary command.
pub async fn summary(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let views = shop.views();

    if ctx.output.is_json() {
        ctx.output.json(views.summary());
        return Ok(());
    }

    ctx.output.header("Order summary");
    match views.summary() {
        CheckoutSummary::Empty { message } => ctx.output.info(message),
        CheckoutSummary::Items {
            rows, total_label, ..
        } => {
            for row in rows {
                ctx.output.table_row(&[&row.label, &row.subtotal_label], &[32, 12]);
            }
            ctx.output.kv("Total", total_label);
        }
    }
    Ok(())
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let form = CheckoutForm::from(args);

    let confirmation = shop.checkout(&form)?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.kv("Items", &confirmation.units.to_string());
    ctx.output
        .kv("Charged", &confirmation.total.display(ctx.currency()));
    Ok(())
}
