//! The capability a list must provide for a [`ListCursor`](crate::ListCursor)
//! to navigate it.
//!
//! The cursor never owns list data. It asks a [`ListAdapter`] for topology
//! (first, previous and next keys), for a [`RowHandle`] to the rendered row of
//! a key, and for the scroll container that rows live in. Everything else
//! about the list (its items, its ordering, when it redraws) stays with the
//! widget that owns it.
//!
//! ### Example
//! ```rust
//! use list_cursor::adapter::ListAdapter;
//! use list_cursor::list::{self, Item};
//!
//! #[derive(Clone)]
//! struct Name(&'static str);
//!
//! impl std::fmt::Display for Name {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{}", self.0)
//!     }
//! }
//!
//! impl Item for Name {
//!     fn key(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! let list = list::Model::new(vec![Name("ann"), Name("bo")], 20, 5);
//! assert_eq!(list.first_key().as_deref(), Some("ann"));
//! assert_eq!(list.next_key(&"ann".to_string()).as_deref(), Some("bo"));
//! assert_eq!(list.next_key(&"bo".to_string()), None);
//! ```

use std::fmt::Display;

/// Top and bottom edges of a row, relative to the scroll container's
/// current scroll position.
///
/// A negative `top` means the row starts above the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowOffsets {
    /// Offset of the row's top edge.
    pub top: i32,
    /// Offset of the row's bottom edge.
    pub bottom: i32,
}

impl RowOffsets {
    /// Creates offsets from a top edge and a height. The bottom edge
    /// saturates at `i32::MAX`.
    pub fn new(top: i32, height: i32) -> Self {
        Self {
            top,
            bottom: top.saturating_add(height),
        }
    }
}

/// A handle to the rendered presentation of one list row.
pub trait RowHandle {
    /// Adds the style marker to the row.
    fn apply_highlight(&mut self, class: &str);

    /// Removes the style marker from the row. Removing an absent marker is a no-op.
    fn remove_highlight(&mut self, class: &str);

    /// Returns true when the row carries the marker.
    fn has_highlight(&self, class: &str) -> bool;

    /// Current geometry of the row inside its scroll container.
    fn offsets(&self) -> RowOffsets;
}

/// Topology and rendering access to an externally owned ordered list.
///
/// Implementations must tolerate keys that are no longer in the list:
/// `prev_key`, `next_key` and `find_row` return `None` for them.
pub trait ListAdapter {
    /// Identity of a list item.
    type Key: Clone + PartialEq + Display;

    /// Row handle borrowed from the adapter.
    type Row<'a>: RowHandle
    where
        Self: 'a;

    /// Key of the first item in current order, `None` when the list is empty.
    fn first_key(&self) -> Option<Self::Key>;

    /// Key immediately before `key`, `None` if `key` is first or unknown.
    fn prev_key(&self, key: &Self::Key) -> Option<Self::Key>;

    /// Key immediately after `key`, `None` if `key` is last or unknown.
    fn next_key(&self, key: &Self::Key) -> Option<Self::Key>;

    /// Rendered row for `key`.
    ///
    /// With `force_render` the adapter renders the row on demand if it is part
    /// of the list but not yet drawn.
    fn find_row(&mut self, key: &Self::Key, force_render: bool) -> Option<Self::Row<'_>>;

    /// Identifier of the scrollable container holding the rows.
    fn scroll_container(&self) -> &str;

    /// Visible height of the scroll container.
    fn container_height(&self) -> i32;

    /// Moves the container's scroll position by `delta`. Positive scrolls down.
    fn scroll_by(&mut self, delta: i32);
}

impl<L: ListAdapter + ?Sized> ListAdapter for &mut L {
    type Key = L::Key;
    type Row<'a>
        = L::Row<'a>
    where
        Self: 'a;

    fn first_key(&self) -> Option<Self::Key> {
        (**self).first_key()
    }

    fn prev_key(&self, key: &Self::Key) -> Option<Self::Key> {
        (**self).prev_key(key)
    }

    fn next_key(&self, key: &Self::Key) -> Option<Self::Key> {
        (**self).next_key(key)
    }

    fn find_row(&mut self, key: &Self::Key, force_render: bool) -> Option<Self::Row<'_>> {
        (**self).find_row(key, force_render)
    }

    fn scroll_container(&self) -> &str {
        (**self).scroll_container()
    }

    fn container_height(&self) -> i32 {
        (**self).container_height()
    }

    fn scroll_by(&mut self, delta: i32) {
        (**self).scroll_by(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offsets_bottom_saturates() {
        assert_eq!(RowOffsets::new(3, 2), RowOffsets { top: 3, bottom: 5 });
        assert_eq!(RowOffsets::new(i32::MAX - 1, 5).bottom, i32::MAX);
    }
}
