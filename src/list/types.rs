//! Item trait and rendered row storage for the in-memory list.

use crate::adapter::{RowHandle, RowOffsets};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Trait for items that can be shown, navigated and filtered in a list.
///
/// `key()` is the stable identity the cursor tracks; it must be unique within
/// one list. The `Display` output is what gets rendered, one row line per
/// text line.
///
/// # Examples
///
/// ```
/// use list_cursor::list::Item;
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Member {
///     id: u32,
///     name: String,
/// }
///
/// impl Display for Member {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.name)
///     }
/// }
///
/// impl Item for Member {
///     fn key(&self) -> String {
///         self.id.to_string()
///     }
/// }
/// ```
pub trait Item: Display + Clone {
    /// Unique identity of the item.
    fn key(&self) -> String;

    /// Text matched by the fuzzy filter. Defaults to the display text.
    fn filter_value(&self) -> String {
        self.to_string()
    }
}

/// A drawn row. Dropped and rebuilt whenever the list re-renders, which also
/// drops any highlight markers it carried.
#[derive(Debug, Clone)]
pub(super) struct RenderedRow {
    pub(super) key: String,
    pub(super) lines: Vec<String>,
    pub(super) top: usize,
    pub(super) classes: BTreeSet<String>,
}

impl RenderedRow {
    pub(super) fn new<I: Item>(item: &I, top: usize) -> Self {
        let text = item.to_string();
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            key: item.key(),
            lines,
            top,
            classes: BTreeSet::new(),
        }
    }

    pub(super) fn height(&self) -> usize {
        self.lines.len()
    }

    pub(super) fn bottom(&self) -> usize {
        self.top + self.height()
    }
}

/// Handle to a rendered row of a [`Model`](super::Model).
#[derive(Debug)]
pub struct RowRef<'a> {
    pub(super) classes: &'a mut BTreeSet<String>,
    pub(super) offsets: RowOffsets,
}

impl RowHandle for RowRef<'_> {
    fn apply_highlight(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_highlight(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_highlight(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn offsets(&self) -> RowOffsets {
        self.offsets
    }
}
