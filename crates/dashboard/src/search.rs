use history::{HistoryStore, RecentSearches};

use crate::config::DashboardConfig;
use crate::markup;
use crate::page::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query or missing input field.
    Ignored,
    Searched { term: String },
}

/// Search box with a persisted recent-search list.
///
/// The store is re-read on every search so several widgets sharing a store
/// see each other's terms.
#[derive(Debug)]
pub struct SearchWidget<S> {
    store: S,
    recent: RecentSearches,
    capacity: usize,
    input_id: String,
    results_id: String,
    recent_list_id: String,
}

impl<S: HistoryStore> SearchWidget<S> {
    pub fn new(store: S, config: &DashboardConfig) -> Self {
        let capacity = config.max_recent_searches;
        let recent = store.load_or_default().with_capacity(capacity);
        Self {
            store,
            recent,
            capacity,
            input_id: config.search_input_id.clone(),
            results_id: config.search_results_id.clone(),
            recent_list_id: config.recent_searches_id.clone(),
        }
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reloads the list from the store and renders it.
    pub fn refresh<P: Page>(&mut self, page: &mut P) {
        self.recent = self.store.load_or_default().with_capacity(self.capacity);
        self.render_recent(page);
    }

    pub fn submit<P: Page>(&mut self, page: &mut P, term: &str) -> SearchOutcome {
        let term = term.trim();
        if term.is_empty() {
            return SearchOutcome::Ignored;
        }
        tracing::info!(term, "searching");

        self.recent = match self.store.record(term, self.capacity) {
            Ok(recent) => recent,
            Err(err) => {
                tracing::warn!(%err, "recent searches not persisted");
                let mut recent = self.recent.clone();
                recent.push(term);
                recent
            }
        };
        self.render_recent(page);
        page.set_inner_html(&self.results_id, &markup::search_results(term));

        SearchOutcome::Searched {
            term: term.to_string(),
        }
    }

    /// Submits whatever the input field currently holds.
    pub fn submit_input<P: Page>(&mut self, page: &mut P) -> SearchOutcome {
        let term = page.input_value(&self.input_id).unwrap_or_default();
        self.submit(page, &term)
    }

    pub fn handle_key<P: Page>(&mut self, page: &mut P, key: &str) -> SearchOutcome {
        if key != "Enter" {
            return SearchOutcome::Ignored;
        }
        self.submit_input(page)
    }

    /// Puts a recent term back into the input and searches for it.
    pub fn select_recent<P: Page>(&mut self, page: &mut P, term: &str) -> SearchOutcome {
        if !page.set_input_value(&self.input_id, term) {
            return SearchOutcome::Ignored;
        }
        self.submit_input(page)
    }

    pub fn render_recent<P: Page>(&self, page: &mut P) {
        page.set_inner_html(&self.recent_list_id, &markup::recent_searches(&self.recent));
    }
}
