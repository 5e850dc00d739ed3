//! Localized UI labels.
//!
//! The label table is an embedded keyed resource: language code → label
//! map. It is materialized once and never mutated. Resolution has a
//! single fallback rule: an unknown language code yields the English set
//! unchanged. Per-key lookups return `Option` so call sites can fall
//! back to the literal value carried in the report itself.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const LABELS_JSON: &str = include_str!("../resources/labels.json");

const BASE_LANGUAGE: &str = "en";

static CATALOG: Lazy<HashMap<String, LabelSet>> = Lazy::new(|| {
    // The resource is compiled in; a malformed table is a build defect,
    // caught by the catalog tests.
    serde_json::from_str::<HashMap<String, HashMap<String, String>>>(LABELS_JSON)
        .unwrap_or_else(|e| {
            log::error!("embedded label table is malformed: {e}");
            HashMap::new()
        })
        .into_iter()
        .map(|(code, labels)| (code, LabelSet { labels }))
        .collect()
});

/// The complete set of display labels for one language.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    labels: HashMap<String, String>,
}

impl LabelSet {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Label for `key`, or the supplied literal when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Static catalog of per-language label sets.
pub struct LabelCatalog;

impl LabelCatalog {
    /// Labels for `code`. Total: an unknown code returns the English set.
    pub fn get(code: &str) -> &'static LabelSet {
        static EMPTY: Lazy<LabelSet> = Lazy::new(LabelSet::default);
        CATALOG
            .get(code)
            .or_else(|| CATALOG.get(BASE_LANGUAGE))
            .unwrap_or_else(|| &EMPTY)
    }

    /// Language codes present in the catalog.
    pub fn codes() -> impl Iterator<Item = &'static str> {
        CATALOG.keys().map(String::as_str)
    }
}
