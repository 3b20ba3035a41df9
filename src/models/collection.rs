use std::collections::HashMap;

/// Optional collection-level metadata supplied externally alongside the item
/// list: header texts, per-item captions, and adjacency targets for
/// collection-to-collection navigation. Every field may be absent; absence
/// degrades the corresponding feature silently.
#[derive(Debug, Clone, Default)]
pub struct CollectionInfo {
    pub title: Option<String>,
    pub date: Option<String>,
    /// Caption text keyed by item name
    pub captions: HashMap<String, String>,
    /// Target identifier of the previous sibling collection, if any
    pub prev: Option<String>,
    /// Target identifier of the next sibling collection, if any
    pub next: Option<String>,
    /// Target identifier of the parent collection, if any
    pub exit: Option<String>,
}

impl CollectionInfo {
    /// Caption for an item, empty string when none is configured.
    pub fn caption_for(&self, name: &str) -> &str {
        self.captions.get(name).map(String::as_str).unwrap_or("")
    }
}
