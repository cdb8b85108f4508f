//! In-memory, filterable, progressively rendered list.
//!
//! [`Model`] is a ready-made [`ListAdapter`](crate::adapter::ListAdapter) for the list cursor. It owns an
//! ordered set of [`Item`]s, narrows them with a fuzzy filter and draws rows
//! into a [`viewport`](crate::viewport).
//!
//! ## Rendering model
//!
//! Rows are rendered lazily in batches of `render_batch`: after any rebuild
//! only the first batch exists. A row outside the rendered prefix can only be
//! reached with a forced `find_row`, which renders whole batches up to and
//! including it (the cursor's `go_to` does this). `render_more()` renders one
//! more batch, for example when the user scrolls near the end.
//!
//! Every rebuild drops the rendered rows together with their highlight
//! markers:
//! - [`Model::set_items`] and [`Model::set_filter`] change membership and
//!   scroll back to the top. Follow them with the cursor's `reset()`.
//! - [`Model::rerender`] redraws the same keys in the same order and keeps the
//!   scroll position. Follow it with the cursor's `redraw()`.
//!
//! A row is as tall as its display text has lines.

mod adapter;
mod filtering;
mod rendering;
pub mod style;
mod types;

pub use style::{ListStyles, ELLIPSIS};
pub use types::{Item, RowRef};

use crate::viewport;
use std::collections::HashMap;
use types::RenderedRow;

/// Number of rows rendered per batch by default.
pub const DEFAULT_RENDER_BATCH: usize = 50;

/// Scroll container identifier used when none is configured.
pub const DEFAULT_SCROLL_CONTAINER: &str = "list";

/// The list model.
#[derive(Debug, Clone)]
pub struct Model<I: Item> {
    /// Row styles.
    pub styles: ListStyles,

    items: Vec<I>,
    filter: String,
    visible: Vec<usize>,
    positions: HashMap<String, usize>,
    rendered: Vec<RenderedRow>,
    render_batch: usize,
    viewport: viewport::Model,
    scroll_container: String,
}

impl<I: Item> Model<I> {
    /// Creates a list showing all `items` in a `width` x `height` viewport.
    pub fn new(items: Vec<I>, width: usize, height: usize) -> Self {
        let mut list = Self {
            styles: ListStyles::default(),
            items,
            filter: String::new(),
            visible: Vec::new(),
            positions: HashMap::new(),
            rendered: Vec::new(),
            render_batch: DEFAULT_RENDER_BATCH,
            viewport: viewport::new(width, height),
            scroll_container: DEFAULT_SCROLL_CONTAINER.to_string(),
        };
        list.rebuild();
        list
    }

    /// Sets how many rows are rendered per batch (builder pattern).
    /// Values below 1 are clamped to 1.
    pub fn with_render_batch(mut self, render_batch: usize) -> Self {
        self.render_batch = render_batch.max(1);
        self.rebuild();
        self
    }

    /// Names the scroll container (builder pattern).
    pub fn with_scroll_container(mut self, id: impl Into<String>) -> Self {
        self.scroll_container = id.into();
        self
    }

    /// Sets row styles (builder pattern).
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Resizes the viewport (builder pattern).
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.set_dimensions(width, height);
        self
    }

    /// Resizes the viewport.
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.viewport.set_dimensions(width, height);
    }

    /// Replaces all items and rebuilds the rows.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.rebuild();
    }

    /// All items, ignoring the filter.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// The visible item with the given key.
    pub fn item(&self, key: &str) -> Option<&I> {
        let pos = *self.positions.get(key)?;
        self.items.get(self.visible[pos])
    }

    /// Keys of the visible items, in display order.
    pub fn visible_keys(&self) -> Vec<String> {
        self.visible.iter().map(|&i| self.items[i].key()).collect()
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns true when no item is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of rows currently rendered.
    pub fn rendered_len(&self) -> usize {
        self.rendered.len()
    }

    /// Renders one more batch of rows. Returns false when everything was
    /// already rendered.
    pub fn render_more(&mut self) -> bool {
        if self.rendered.len() >= self.visible.len() {
            return false;
        }
        self.render_through(self.rendered.len() + 1);
        true
    }

    /// Rebuilds the rows from the same visible keys, keeping the scroll
    /// position. Highlight markers are dropped.
    pub fn rerender(&mut self) {
        let count = self.rendered.len();
        let y_offset = self.viewport.y_offset();
        self.rendered.clear();
        self.render_through(count);
        self.viewport.set_y_offset(y_offset);
    }

    /// Returns true if the rendered row for `key` carries `class`.
    pub fn is_highlighted(&self, key: &str, class: &str) -> bool {
        self.positions
            .get(key)
            .and_then(|&pos| self.rendered.get(pos))
            .is_some_and(|row| row.classes.contains(class))
    }

    /// Keys of rendered rows carrying `class`, in display order.
    pub fn highlighted_keys(&self, class: &str) -> Vec<String> {
        self.rendered
            .iter()
            .filter(|row| row.classes.contains(class))
            .map(|row| row.key.clone())
            .collect()
    }

    /// The scroll state of the list.
    pub fn viewport(&self) -> &viewport::Model {
        &self.viewport
    }

    /// Mutable scroll state, for mouse or page scrolling by the host.
    pub fn viewport_mut(&mut self) -> &mut viewport::Model {
        &mut self.viewport
    }

    // Recomputes membership and drops all rendered rows.
    fn rebuild(&mut self) {
        self.visible = self.matching_indices();
        self.positions = self
            .visible
            .iter()
            .enumerate()
            .map(|(pos, &i)| (self.items[i].key(), pos))
            .collect();
        self.rendered.clear();
        self.viewport.goto_top();
        self.render_through(self.render_batch);
    }

    // Renders whole batches until at least `count` rows exist.
    fn render_through(&mut self, count: usize) {
        let target = count
            .div_ceil(self.render_batch)
            .saturating_mul(self.render_batch)
            .min(self.visible.len());
        while self.rendered.len() < target {
            let top = self.rendered.last().map_or(0, RenderedRow::bottom);
            let item = &self.items[self.visible[self.rendered.len()]];
            self.rendered.push(RenderedRow::new(item, top));
        }
        let content_height = self.rendered.last().map_or(0, RenderedRow::bottom);
        self.viewport.set_content_height(content_height);
    }

    fn key_at(&self, pos: usize) -> Option<String> {
        self.visible.get(pos).map(|&i| self.items[i].key())
    }
}

/// Create a new list. Equivalent to `Model::new(items, width, height)`.
pub fn new<I: Item>(items: Vec<I>, width: usize, height: usize) -> Model<I> {
    Model::new(items, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{ListAdapter, RowHandle};
    use lipgloss_extras::lipgloss;
    use std::fmt;

    #[derive(Debug, Clone)]
    struct Member {
        id: &'static str,
        name: &'static str,
    }

    impl fmt::Display for Member {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.name)
        }
    }

    impl Item for Member {
        fn key(&self) -> String {
            self.id.to_string()
        }
    }

    fn members() -> Vec<Member> {
        vec![
            Member { id: "1", name: "Iago" },
            Member { id: "2", name: "Cordelia" },
            Member { id: "3", name: "Othello" },
            Member { id: "4", name: "Hamlet" },
            Member { id: "5", name: "Prospero\nthe duke" },
            Member { id: "6", name: "King Lear" },
        ]
    }

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_topology() {
        let list = new(members(), 20, 4);
        assert_eq!(list.first_key(), Some(key("1")));
        assert_eq!(list.next_key(&key("1")), Some(key("2")));
        assert_eq!(list.prev_key(&key("1")), None);
        assert_eq!(list.next_key(&key("6")), None);
        assert_eq!(list.prev_key(&key("6")), Some(key("5")));
        assert_eq!(list.next_key(&key("99")), None);
    }

    #[test]
    fn test_empty_list() {
        let list: Model<Member> = new(vec![], 20, 4);
        assert!(list.is_empty());
        assert_eq!(list.first_key(), None);
        assert_eq!(list.rendered_len(), 0);
        assert_eq!(list.view(), "");
    }

    #[test]
    fn test_progressive_rendering() {
        let mut list = new(members(), 20, 4).with_render_batch(2);
        assert_eq!(list.rendered_len(), 2);

        assert!(list.find_row(&key("4"), false).is_none());
        assert!(list.find_row(&key("4"), true).is_some());
        assert_eq!(list.rendered_len(), 4);

        assert!(list.render_more());
        assert_eq!(list.rendered_len(), 6);
        assert!(!list.render_more());
    }

    #[test]
    fn test_row_offsets_follow_scroll() {
        let mut list = new(members(), 20, 3);
        let row = list.find_row(&key("6"), false).expect("rendered");
        // Prospero spans two lines, so King Lear starts at line 6.
        assert_eq!(row.offsets().top, 6);
        assert_eq!(row.offsets().bottom, 7);
        drop(row);

        list.scroll_by(4);
        let row = list.find_row(&key("6"), false).expect("rendered");
        assert_eq!(row.offsets().top, 2);
        assert_eq!(list.container_height(), 3);
    }

    #[test]
    fn test_filter_rebuilds_and_drops_highlights() {
        let mut list = new(members(), 20, 4);
        list.find_row(&key("2"), false)
            .expect("rendered")
            .apply_highlight("hl");
        assert!(list.is_highlighted("2", "hl"));

        list.set_filter("de");
        assert!(list.is_filtering());
        assert_eq!(list.visible_keys(), vec!["2", "5"]);
        assert!(!list.is_highlighted("2", "hl"));
        assert_eq!(list.first_key(), Some(key("2")));
        assert_eq!(list.next_key(&key("2")), Some(key("5")));
        assert_eq!(list.next_key(&key("3")), None);
        assert!(list.item("1").is_none());
        assert_eq!(list.item("5").map(|m| m.id), Some("5"));

        list.set_filter("");
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_rerender_keeps_scroll_position() {
        let mut list = new(members(), 20, 3);
        list.scroll_by(2);
        list.find_row(&key("2"), false)
            .expect("rendered")
            .apply_highlight("hl");

        list.rerender();
        assert_eq!(list.viewport().y_offset(), 2);
        assert_eq!(list.rendered_len(), 6);
        assert!(list.highlighted_keys("hl").is_empty());
    }

    #[test]
    fn test_view_draws_visible_lines() {
        let mut list = new(members(), 20, 3);
        list.scroll_by(3);
        let view = lipgloss::strip_ansi(&list.view());
        let lines: Vec<&str> = view.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["Hamlet", "Prospero", "the duke"]);
    }

    #[test]
    fn test_view_truncates_to_width() {
        let list = new(members(), 5, 2);
        let view = lipgloss::strip_ansi(&list.view());
        let lines: Vec<&str> = view.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["Iago", "Cord…"]);
    }
}
