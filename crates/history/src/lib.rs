use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileHistoryStore;

/// Storage key shared by every search widget on the page.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Most-recent-first list of search terms.
///
/// Invariants:
/// - no empty terms and no duplicates,
/// - never longer than `capacity`,
/// - re-adding a term moves it to the front.
///
/// Serialized as a bare JSON array of strings; the capacity is not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RecentSearches {
    terms: Vec<String>,
    capacity: usize,
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            capacity: MAX_RECENT_SEARCHES,
        }
    }
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from untrusted terms (e.g. storage content), keeping the
    /// first occurrence of each term and dropping blanks.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        for term in terms {
            let term: String = term.into();
            let term = term.trim();
            if term.is_empty() || out.terms.iter().any(|t| t == term) {
                continue;
            }
            out.terms.push(term.to_string());
        }
        out.terms.truncate(out.capacity);
        out
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self.terms.truncate(self.capacity);
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Moves `term` to the front, evicting the oldest entry past capacity.
    ///
    /// Returns `false` (and leaves the list untouched) for blank terms.
    pub fn push(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(self.capacity);
        true
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<Vec<String>> for RecentSearches {
    fn from(terms: Vec<String>) -> Self {
        Self::from_terms(terms)
    }
}

impl From<RecentSearches> for Vec<String> {
    fn from(searches: RecentSearches) -> Self {
        searches.terms
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    StorageUnavailable,
    Corrupt(String),
    Io(String),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::StorageUnavailable => write!(f, "browser storage unavailable"),
            HistoryError::Corrupt(msg) => write!(f, "recent searches corrupt: {msg}"),
            HistoryError::Io(msg) => write!(f, "recent searches storage error: {msg}"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Parses the persisted form. A missing or blank value is an empty list.
pub fn parse_recent_searches(raw: &str) -> Result<RecentSearches, HistoryError> {
    if raw.trim().is_empty() {
        return Ok(RecentSearches::default());
    }
    serde_json::from_str::<RecentSearches>(raw).map_err(|e| HistoryError::Corrupt(e.to_string()))
}

pub fn encode_recent_searches(searches: &RecentSearches) -> Result<String, HistoryError> {
    serde_json::to_string(searches).map_err(|e| HistoryError::Io(e.to_string()))
}

pub trait HistoryStore {
    fn load(&self) -> Result<RecentSearches, HistoryError>;
    fn save(&mut self, searches: &RecentSearches) -> Result<(), HistoryError>;

    /// Unreadable or corrupt content reads as an empty list.
    fn load_or_default(&self) -> RecentSearches {
        match self.load() {
            Ok(searches) => searches,
            Err(err) => {
                tracing::warn!(%err, "recent searches unreadable, starting empty");
                RecentSearches::default()
            }
        }
    }

    /// Pushes `term` into the stored list and persists the result.
    fn record(&mut self, term: &str, capacity: usize) -> Result<RecentSearches, HistoryError> {
        let mut searches = self.load_or_default().with_capacity(capacity);
        if !searches.push(term) {
            return Ok(searches);
        }
        self.save(&searches)?;
        tracing::debug!(len = searches.len(), "recent searches saved");
        Ok(searches)
    }
}

/// Key-value store with `localStorage` semantics, kept in memory.
#[derive(Debug, Clone)]
pub struct InMemoryHistoryStore {
    key: String,
    items: BTreeMap<String, String>,
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new(RECENT_SEARCHES_KEY)
    }
}

impl InMemoryHistoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: BTreeMap::new(),
        }
    }

    /// Seeds the store with an already-serialized value.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.items.insert(self.key.clone(), raw.into());
        self
    }

    pub fn raw(&self) -> Option<&str> {
        self.items.get(&self.key).map(String::as_str)
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn load(&self) -> Result<RecentSearches, HistoryError> {
        match self.raw() {
            Some(raw) => parse_recent_searches(raw),
            None => Ok(RecentSearches::default()),
        }
    }

    fn save(&mut self, searches: &RecentSearches) -> Result<(), HistoryError> {
        let raw = encode_recent_searches(searches)?;
        self.items.insert(self.key.clone(), raw);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_storage {
    use super::{HistoryError, HistoryStore, RecentSearches};

    #[derive(Debug)]
    pub struct LocalStorageHistoryStore {
        key: String,
    }

    impl LocalStorageHistoryStore {
        pub fn new(key: impl Into<String>) -> Result<Self, HistoryError> {
            // Fail early so callers can fall back to memory.
            window_local_storage()?;
            Ok(Self { key: key.into() })
        }
    }

    impl HistoryStore for LocalStorageHistoryStore {
        fn load(&self) -> Result<RecentSearches, HistoryError> {
            let storage = window_local_storage()?;
            let raw = storage
                .get_item(&self.key)
                .map_err(|e| HistoryError::Io(format!("get_item failed: {:?}", e)))?;
            match raw {
                Some(raw) => super::parse_recent_searches(&raw),
                None => Ok(RecentSearches::default()),
            }
        }

        fn save(&mut self, searches: &RecentSearches) -> Result<(), HistoryError> {
            let storage = window_local_storage()?;
            let raw = super::encode_recent_searches(searches)?;
            storage
                .set_item(&self.key, &raw)
                .map_err(|e| HistoryError::Io(format!("set_item failed: {:?}", e)))
        }
    }

    fn window_local_storage() -> Result<web_sys::Storage, HistoryError> {
        let win = web_sys::window().ok_or(HistoryError::StorageUnavailable)?;
        win.local_storage()
            .map_err(|e| HistoryError::Io(format!("localStorage error: {:?}", e)))?
            .ok_or(HistoryError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_storage::LocalStorageHistoryStore;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct LocalStorageHistoryStore;

#[cfg(not(target_arch = "wasm32"))]
impl LocalStorageHistoryStore {
    pub fn new(_key: impl Into<String>) -> Result<Self, HistoryError> {
        Err(HistoryError::StorageUnavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HistoryStore for LocalStorageHistoryStore {
    fn load(&self) -> Result<RecentSearches, HistoryError> {
        Err(HistoryError::StorageUnavailable)
    }

    fn save(&mut self, _searches: &RecentSearches) -> Result<(), HistoryError> {
        Err(HistoryError::StorageUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn terms(s: &RecentSearches) -> Vec<&str> {
        s.iter().collect()
    }

    #[test]
    fn resubmitting_moves_term_to_front() {
        let mut s = RecentSearches::new();
        s.push("Paris");
        s.push("London");
        s.push("Paris");
        assert_eq!(terms(&s), vec!["Paris", "London"]);
    }

    #[test]
    fn keeps_five_most_recent() {
        let mut s = RecentSearches::new();
        for t in ["a", "b", "c", "d", "e", "f", "g"] {
            s.push(t);
        }
        assert_eq!(terms(&s), vec!["g", "f", "e", "d", "c"]);
    }

    #[test]
    fn blank_terms_are_ignored() {
        let mut s = RecentSearches::from_terms(["Kandy"]);
        assert!(!s.push(""));
        assert!(!s.push("   \t"));
        assert_eq!(terms(&s), vec!["Kandy"]);
    }

    #[test]
    fn push_trims_terms() {
        let mut s = RecentSearches::new();
        s.push("  Galle ");
        s.push("Galle");
        assert_eq!(terms(&s), vec!["Galle"]);
    }

    #[test]
    fn any_push_sequence_stays_bounded_and_unique() {
        let mut s = RecentSearches::new();
        let inputs = ["x", "y", "x", "z", "w", "y", "v", "u", "x", "t", "x", "x"];
        for (i, t) in inputs.iter().enumerate() {
            s.push(t);
            assert!(s.len() <= MAX_RECENT_SEARCHES);
            assert_eq!(s.terms()[0], inputs[i]);
            let mut sorted: Vec<&str> = terms(&s);
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), s.len());
        }
    }

    #[test]
    fn loaded_terms_are_normalised() {
        let s = parse_recent_searches(r#"["a","a"," ","b","c","d","e","f"]"#).unwrap();
        assert_eq!(terms(&s), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn blank_storage_reads_as_empty() {
        assert!(parse_recent_searches("").unwrap().is_empty());
        assert!(parse_recent_searches("  ").unwrap().is_empty());
    }

    #[test]
    fn corrupt_storage_is_reported() {
        let err = parse_recent_searches("{not json").unwrap_err();
        assert!(matches!(err, HistoryError::Corrupt(_)));
        let err = parse_recent_searches("[1, 2]").unwrap_err();
        assert!(matches!(err, HistoryError::Corrupt(_)));
    }

    #[test]
    fn serializes_as_plain_array() {
        let s = RecentSearches::from_terms(["Paris", "London"]);
        assert_eq!(encode_recent_searches(&s).unwrap(), r#"["Paris","London"]"#);
    }

    #[test]
    fn record_persists_under_key() {
        let mut store = InMemoryHistoryStore::default();
        store.record("Paris", MAX_RECENT_SEARCHES).unwrap();
        store.record("London", MAX_RECENT_SEARCHES).unwrap();
        let s = store.record("Paris", MAX_RECENT_SEARCHES).unwrap();
        assert_eq!(terms(&s), vec!["Paris", "London"]);
        assert_eq!(store.raw(), Some(r#"["Paris","London"]"#));
    }

    #[test]
    fn record_blank_leaves_storage_untouched() {
        let mut store = InMemoryHistoryStore::default().with_raw(r#"["Kandy"]"#);
        store.record("  ", MAX_RECENT_SEARCHES).unwrap();
        assert_eq!(store.raw(), Some(r#"["Kandy"]"#));
    }

    #[test]
    fn record_overwrites_corrupt_content() {
        let mut store = InMemoryHistoryStore::default().with_raw("garbage");
        assert!(store.load_or_default().is_empty());
        store.record("Ratnapura", MAX_RECENT_SEARCHES).unwrap();
        assert_eq!(store.raw(), Some(r#"["Ratnapura"]"#));
    }

    #[test]
    fn record_honours_smaller_capacity() {
        let mut store = InMemoryHistoryStore::default();
        for t in ["a", "b", "c"] {
            store.record(t, 2).unwrap();
        }
        assert_eq!(terms(&store.load().unwrap()), vec!["c", "b"]);
    }

    #[test]
    fn local_storage_is_unavailable_off_wasm() {
        assert_eq!(
            LocalStorageHistoryStore::new(RECENT_SEARCHES_KEY).unwrap_err(),
            HistoryError::StorageUnavailable
        );
    }
}
