//! List Filtering Pipeline
//!
//! Pure pieces of the dashboard's derived view list: the category filter,
//! category derivation, and the staleness guard for debounced searches.

use std::cell::Cell;
use std::rc::Rc;

use crate::models::Sweet;

/// Sentinel category meaning "no filter".
pub const ALL_CATEGORIES: &str = "All";

/// Quiescence window before a search fires, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Narrow `sweets` to `category`, or return it unchanged for the sentinel.
pub fn apply_category_filter(sweets: Vec<Sweet>, category: &str) -> Vec<Sweet> {
    if category == ALL_CATEGORIES {
        return sweets;
    }
    sweets.into_iter().filter(|s| s.category == category).collect()
}

/// Categories present in the master list, first-seen order, sentinel first.
pub fn derive_categories(sweets: &[Sweet]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for sweet in sweets {
        if !categories.contains(&sweet.category) {
            categories.push(sweet.category.clone());
        }
    }
    categories
}

/// Monotonic counter tagging each debounced recomputation.
///
/// Every recomputation calls [`begin`](Self::begin) and keeps its ticket;
/// a completion may only publish while its ticket is still current.
/// Network completion order is not issue order, so this is an explicit
/// staleness check rather than last-write-wins.
#[derive(Clone, Default)]
pub struct SearchGeneration(Rc<Cell<u64>>);

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding all earlier tickets.
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet(id: i64, category: &str) -> Sweet {
        Sweet {
            id,
            name: format!("sweet-{id}"),
            category: category.to_string(),
            price: 1.0,
            quantity: 5,
            image_url: None,
            is_veg: true,
        }
    }

    #[test]
    fn sentinel_category_is_identity() {
        let list = vec![sweet(1, "Cake"), sweet(2, "Pie")];
        assert_eq!(apply_category_filter(list.clone(), ALL_CATEGORIES), list);
    }

    #[test]
    fn category_filter_keeps_only_exact_matches() {
        let list = vec![sweet(1, "Cake"), sweet(2, "Pie"), sweet(3, "Cake")];
        let filtered = apply_category_filter(list, "Cake");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.category == "Cake"));
    }

    #[test]
    fn category_filter_on_absent_category_is_empty() {
        let list = vec![sweet(1, "Cake")];
        assert!(apply_category_filter(list, "Barfi").is_empty());
    }

    #[test]
    fn categories_are_first_seen_deduplicated_with_sentinel() {
        let list = vec![sweet(1, "Cake"), sweet(2, "Pie"), sweet(3, "Cake")];
        assert_eq!(derive_categories(&list), vec!["All", "Cake", "Pie"]);
    }

    #[test]
    fn categories_of_empty_list_is_just_sentinel() {
        assert_eq!(derive_categories(&[]), vec!["All"]);
    }

    #[test]
    fn newer_ticket_supersedes_older() {
        let generation = SearchGeneration::new();
        let choc = generation.begin();
        let chocolate = generation.begin();
        assert!(!generation.is_current(choc));
        assert!(generation.is_current(chocolate));
    }

    #[test]
    fn out_of_order_completion_cannot_publish_stale_result() {
        // "choc" is issued, then "chocolate" before it resolves. Whichever
        // response lands first, only "chocolate" may publish.
        let generation = SearchGeneration::new();
        let mut published: Option<&str> = None;

        let choc = generation.begin();
        let chocolate = generation.begin();

        // "chocolate" response arrives first.
        if generation.is_current(chocolate) {
            published = Some("chocolate-results");
        }
        // The stale "choc" response arrives last and is discarded.
        if generation.is_current(choc) {
            published = Some("choc-results");
        }

        assert_eq!(published, Some("chocolate-results"));
    }

    #[test]
    fn ticket_is_current_until_superseded() {
        let generation = SearchGeneration::new();
        let only = generation.begin();
        assert!(generation.is_current(only));
    }
}
