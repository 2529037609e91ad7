//! Search command, one-shot or as-you-type.

use std::time::Instant as StdInstant;

use anyhow::{bail, Result};
use stash_commerce::catalog::{CatalogIndex, Product};
use stash_commerce::messages;
use stash_commerce::search::{SearchBox, SearchOutcome};
use stash_commerce::surface::ScrollSurface;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::{self, Instant};

use super::SearchArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    if args.interactive {
        ctx.output.info(&format!(
            "Type to search, /N to jump to result N, Ctrl-D to quit (debounce {} ms)",
            ctx.storefront_config().search.debounce_ms
        ));
        let currency = ctx.currency().to_string();
        let (search, catalog) = shop.search_box();
        let stdin = BufReader::new(tokio::io::stdin());
        let runs = drive(stdin, search, catalog, &ctx.output, |outcome| {
            render(&ctx.output, outcome, &currency)
        })
        .await?;
        ctx.output.debug(&format!("{} searches ran", runs));
        return Ok(());
    }

    let Some(text) = args.text.as_deref() else {
        bail!("Pass search text or --interactive");
    };
    let outcome = shop.search(text);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "active": outcome.is_active(),
            "results": outcome.results(),
        }));
        return Ok(());
    }

    if !outcome.is_active() {
        ctx.output.info(&format!(
            "Type at least {} characters to search",
            ctx.storefront_config().search.min_query_len
        ));
        return Ok(());
    }
    render(&ctx.output, &outcome, ctx.currency());

    if let Some(n) = args.pick {
        let Some(product) = n.checked_sub(1).and_then(|i| outcome.results().get(i)) else {
            bail!("No result #{}", n);
        };
        let product = Product::clone(product);
        let (search, _) = shop.search_box();
        search.select_and_scroll(&product, &ctx.output);
    }
    Ok(())
}

fn render(output: &Output, outcome: &SearchOutcome<'_>, currency: &str) {
    match outcome {
        SearchOutcome::Inactive => {}
        SearchOutcome::Results(results) if results.is_empty() => {
            output.info(messages::SEARCH_NO_RESULTS)
        }
        SearchOutcome::Results(results) => {
            for (i, product) in results.iter().enumerate() {
                output.list_item(&format!(
                    "{}. {} - {}",
                    i + 1,
                    product.name,
                    product.price.display(currency)
                ));
            }
        }
    }
}

/// Feed lines from `input` into the search box and run queries once input
/// has been quiet for the debounce period.
///
/// A line of the form `/N` selects result `N` of the last completed search.
/// At end of input a still-pending query is allowed to finish. Returns how
/// many queries ran.
pub async fn drive<R, F>(
    input: R,
    search: &mut SearchBox,
    catalog: &CatalogIndex,
    scroll: &dyn ScrollSurface,
    mut show: F,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&SearchOutcome<'_>),
{
    let mut lines = input.lines();
    let mut last: Vec<String> = Vec::new();
    let mut runs = 0;
    let mut open = true;

    while open || search.deadline().is_some() {
        let deadline = search.deadline();

        tokio::select! {
            line = lines.next_line(), if open => match line? {
                Some(line) => {
                    if let Some(pick) = line.strip_prefix('/') {
                        pick_result(pick, &last, search, catalog, scroll);
                    } else {
                        search.input(line, now());
                    }
                }
                None => open = false,
            },
            _ = wait_until(deadline) => {
                if let Some(outcome) = search.poll(catalog.products(), now()) {
                    runs += 1;
                    last = outcome.results().iter().map(|p| p.name.clone()).collect();
                    show(&outcome);
                }
            }
        }
    }

    Ok(runs)
}

fn pick_result(
    pick: &str,
    last: &[String],
    search: &mut SearchBox,
    catalog: &CatalogIndex,
    scroll: &dyn ScrollSurface,
) {
    let product: Option<&Product> = pick
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| last.get(i))
        .and_then(|name| catalog.get(name).ok());

    match product {
        Some(product) => search.select_and_scroll(product, scroll),
        None => tracing::debug!(pick, "no such result"),
    }
}

/// Current time on the runtime clock, as the search box expects it.
fn now() -> StdInstant {
    Instant::now().into_std()
}

async fn wait_until(deadline: Option<StdInstant>) {
    match deadline {
        Some(deadline) => time::sleep_until(Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
