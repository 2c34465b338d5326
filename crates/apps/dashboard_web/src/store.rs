use history::{
    HistoryError, HistoryStore, InMemoryHistoryStore, LocalStorageHistoryStore, RecentSearches,
};

/// localStorage when the browser grants it, memory otherwise (private mode,
/// sandboxed iframes).
#[derive(Debug)]
pub enum WebHistoryStore {
    Local(LocalStorageHistoryStore),
    Memory(InMemoryHistoryStore),
}

impl WebHistoryStore {
    pub fn new(key: &str) -> Self {
        match LocalStorageHistoryStore::new(key) {
            Ok(s) => WebHistoryStore::Local(s),
            Err(_) => WebHistoryStore::Memory(InMemoryHistoryStore::new(key)),
        }
    }
}

impl HistoryStore for WebHistoryStore {
    fn load(&self) -> Result<RecentSearches, HistoryError> {
        match self {
            WebHistoryStore::Local(s) => s.load(),
            WebHistoryStore::Memory(s) => s.load(),
        }
    }

    fn save(&mut self, searches: &RecentSearches) -> Result<(), HistoryError> {
        match self {
            WebHistoryStore::Local(s) => s.save(searches),
            WebHistoryStore::Memory(s) => s.save(searches),
        }
    }
}
