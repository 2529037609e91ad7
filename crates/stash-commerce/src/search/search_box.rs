//! Search input state: debounced queries and result selection.

use std::time::{Duration, Instant};

use crate::catalog::Product;
use crate::search::{Debouncer, SearchEngine, SearchOutcome};
use crate::surface::ScrollSurface;

/// The search field as the page sees it.
#[derive(Debug, Clone)]
pub struct SearchBox {
    engine: SearchEngine,
    debouncer: Debouncer<String>,
    value: String,
}

impl SearchBox {
    /// Create a search box that waits `delay` after the last keystroke.
    pub fn new(engine: SearchEngine, delay: Duration) -> Self {
        Self {
            engine,
            debouncer: Debouncer::new(delay),
            value: String::new(),
        }
    }

    /// Record the field's new contents. Restarts the debounce timer and returns
    /// its deadline.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) -> Instant {
        self.value = text.into();
        self.debouncer.push(self.value.clone(), now)
    }

    /// Run the pending query if the field has been quiet long enough.
    pub fn poll<'a>(&mut self, catalog: &'a [Product], now: Instant) -> Option<SearchOutcome<'a>> {
        let text = self.debouncer.poll(now)?;
        Some(self.engine.query(catalog, &text))
    }

    /// Deadline of the pending query, if one is waiting.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Current field contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Choose a result: clears the field, drops any pending query, and returns
    /// the section to navigate to.
    pub fn select(&mut self, product: &Product) -> &str {
        self.value.clear();
        self.debouncer.cancel();
        self.engine.section_for(product)
    }

    /// [`SearchBox::select`], then scroll the page there.
    pub fn select_and_scroll(&mut self, product: &Product, scroll: &dyn ScrollSurface) {
        let section = self.select(product);
        scroll.scroll_to(section);
    }

    /// The engine queries run through.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingScroll;

    const DELAY: Duration = Duration::from_millis(300);

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Graphic Tee", 300, "/t.jpg", "tees"),
            Product::new("Leather Wallet", 400, "/w.jpg", "wallets"),
        ]
    }

    #[test]
    fn test_only_last_keystroke_queries() {
        let catalog = catalog();
        let mut search = SearchBox::new(SearchEngine::default(), DELAY);
        let start = Instant::now();

        search.input("w", start);
        search.input("wa", start + Duration::from_millis(50));
        search.input("wal", start + Duration::from_millis(120));

        assert!(search.poll(&catalog, start + DELAY).is_none());
        let outcome = search
            .poll(&catalog, start + Duration::from_millis(420))
            .expect("query should fire");
        assert_eq!(outcome.results().len(), 1);
        assert_eq!(outcome.results()[0].name, "Leather Wallet");
        assert!(search.deadline().is_none());
    }

    #[test]
    fn test_short_input_fires_inactive() {
        let catalog = catalog();
        let mut search = SearchBox::new(SearchEngine::default(), DELAY);
        let start = Instant::now();
        search.input("g", start);
        assert_eq!(
            search.poll(&catalog, start + DELAY),
            Some(SearchOutcome::Inactive)
        );
    }

    #[test]
    fn test_select_clears_and_scrolls() {
        let catalog = catalog();
        let mut search = SearchBox::new(SearchEngine::default(), DELAY);
        let scroll = RecordingScroll::new();
        let start = Instant::now();

        search.input("tee", start);
        search.select_and_scroll(&catalog[0], &scroll);

        assert_eq!(search.value(), "");
        assert!(search.poll(&catalog, start + DELAY).is_none());
        assert_eq!(scroll.sections(), vec!["mens-collection".to_string()]);
    }
}
