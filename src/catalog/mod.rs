//! In-memory poet catalog.
//!
//! Holds the crawled poet set and answers the home screen's questions
//! locally: which poets belong to an era, which names match a typed query,
//! and what fits on display page `n`.

use crate::crawler::Crawl;
use crate::model::{Century, Poet};

/// Poets shown per display page.
pub const POETS_PER_PAGE: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct PoetCatalog {
    poets: Vec<Poet>,
    truncated: bool,
    reported_count: u64,
}

impl PoetCatalog {
    pub fn new(crawl: Crawl<Poet>) -> Self {
        Self {
            truncated: !crawl.is_complete(),
            reported_count: crawl.count,
            poets: crawl.items,
        }
    }

    pub fn poets(&self) -> &[Poet] {
        &self.poets
    }

    pub fn len(&self) -> usize {
        self.poets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poets.is_empty()
    }

    /// Collection size the archive reported, which may exceed [`len`](Self::len).
    pub fn reported_count(&self) -> u64 {
        self.reported_count
    }

    /// The crawl stopped early or came back short.
    pub fn may_be_incomplete(&self) -> bool {
        self.truncated
    }

    /// Poets filed under `century`; `None` selects everyone.
    pub fn by_century(&self, century: Option<Century>) -> Vec<&Poet> {
        self.poets
            .iter()
            .filter(|p| century.map_or(true, |c| p.century == c))
            .collect()
    }

    /// Case-insensitive substring match on the poet's name.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Poet> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.poets
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Slice out 1-based display page `page`; out-of-range pages are empty.
pub fn page_of<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(POETS_PER_PAGE);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + POETS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Number of display pages needed for `len` items.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(POETS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poet(id: u64, name: &str, century: Century) -> Poet {
        Poet {
            id,
            name: name.to_string(),
            century,
            image: None,
            image_slug: None,
            poems_count: 0,
        }
    }

    fn catalog() -> PoetCatalog {
        PoetCatalog::new(Crawl {
            items: vec![
                poet(1, "حافظ", Century::Classical),
                poet(2, "سعدی", Century::Classical),
                poet(3, "نیما یوشیج", Century::Modern),
                poet(4, "Forough Farrokhzad", Century::Contemporary),
            ],
            count: 4,
            pages_fetched: 1,
            truncated: false,
        })
    }

    #[test]
    fn test_by_century() {
        let catalog = catalog();
        let ids: Vec<u64> = catalog
            .by_century(Some(Century::Classical))
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(catalog.by_century(None).len(), 4);
        assert!(catalog.by_century(Some(Century::Ancient)).is_empty());
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let catalog = catalog();
        let hits = catalog.search("  farrokh ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);
        assert_eq!(catalog.search("نیما")[0].id, 3);
    }

    #[test]
    fn test_blank_search_matches_nothing() {
        let catalog = catalog();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_paging() {
        let items: Vec<u32> = (1..=47).collect();
        assert_eq!(page_count(items.len()), 3);
        assert_eq!(page_of(&items, 1), &items[0..20]);
        assert_eq!(page_of(&items, 3), &items[40..47]);
        assert!(page_of(&items, 4).is_empty());
        assert!(page_of(&items, 0).is_empty());
        assert_eq!(page_count(0), 0);
    }

    #[test]
    fn test_incomplete_crawl_is_flagged() {
        let catalog = PoetCatalog::new(Crawl {
            items: vec![poet(1, "حافظ", Century::Classical)],
            count: 900,
            pages_fetched: 10,
            truncated: true,
        });
        assert!(catalog.may_be_incomplete());
        assert_eq!(catalog.reported_count(), 900);
        assert_eq!(catalog.len(), 1);
        assert!(!self::catalog().may_be_incomplete());
    }
}
