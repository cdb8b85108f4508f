//! Fuzzy filtering of the list's visible ordering.

use super::types::Item;
use super::Model;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

impl<I: Item> Model<I> {
    /// Sets the filter query and rebuilds the visible rows.
    ///
    /// Items whose `filter_value()` fuzzy-matches the query stay visible in
    /// their original order; an empty query shows everything. Membership
    /// changes, so any cursor over this list must be `reset()` afterwards.
    ///
    /// ```
    /// # use list_cursor::list::{Model, Item};
    /// # #[derive(Clone)]
    /// # struct N(&'static str);
    /// # impl std::fmt::Display for N {
    /// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
    /// # }
    /// # impl Item for N { fn key(&self) -> String { self.0.to_string() } }
    /// let mut list = Model::new(vec![N("alice"), N("bob"), N("alex")], 20, 5);
    /// list.set_filter("al");
    /// assert_eq!(list.visible_keys(), vec!["alice", "alex"]);
    /// ```
    pub fn set_filter(&mut self, query: &str) {
        if self.filter == query {
            return;
        }
        self.filter = query.to_string();
        self.rebuild();
        tracing::debug!(query = %self.filter, visible = self.visible.len(), "list filter applied");
    }

    /// The current filter query.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns true if a non-empty filter is active.
    pub fn is_filtering(&self) -> bool {
        !self.filter.is_empty()
    }

    /// Indices into `items` that pass the current filter, in display order.
    pub(super) fn matching_indices(&self) -> Vec<usize> {
        if self.filter.is_empty() {
            return (0..self.items.len()).collect();
        }
        let matcher = SkimMatcherV2::default();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                matcher
                    .fuzzy_match(&item.filter_value(), &self.filter)
                    .is_some()
            })
            .map(|(i, _)| i)
            .collect()
    }
}
