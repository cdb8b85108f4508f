//! Highlight cursor for externally rendered lists.
//!
//! The cursor remembers which single key of a list is "current", keeps that
//! row marked with a highlight class and scrolls it into view. It owns no list
//! data: topology and rows come from a [`ListAdapter`], and the list may be
//! filtered or redrawn at any time underneath it.
//!
//! Navigation never fails from the caller's point of view. Caller mistakes
//! (`go_to(None)`) and rows that cannot be produced even with forced rendering
//! are reported to a [`Diagnostics`] sink; keys that simply went stale while
//! the list changed are absorbed silently.
//!
//! After the list's membership changes (a new filter, new items) call
//! [`Model::reset`]. After the rows were rebuilt from the same keys call
//! [`Model::redraw`].
//!
//! ### Example
//! ```rust
//! use list_cursor::cursor::{self, Config};
//! use list_cursor::list::{self, Item};
//!
//! #[derive(Clone)]
//! struct User(&'static str);
//!
//! impl std::fmt::Display for User {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{}", self.0)
//!     }
//! }
//!
//! impl Item for User {
//!     fn key(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! let users = list::Model::new(vec![User("u1"), User("u2"), User("u3")], 20, 10);
//! let mut cur = cursor::new(Config::new("highlighted_user"), users).unwrap();
//!
//! cur.reset();
//! assert_eq!(cur.get_key().map(String::as_str), Some("u1"));
//! cur.next();
//! cur.next();
//! cur.next(); // no wraparound
//! assert_eq!(cur.get_key().map(String::as_str), Some("u3"));
//! assert!(cur.list().is_highlighted("u3", "highlighted_user"));
//! ```

use crate::adapter::{ListAdapter, RowHandle};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{CursorError, Result};
use crate::key::{self, KeyMap as KeyMapTrait, KeyPress};
use crate::viewport::scroll_delta;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::fmt;

/// Highlight class used by [`Config::default`].
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlighted";

/// Key bindings for moving the cursor.
#[derive(Debug, Clone)]
pub struct CursorKeyMap {
    /// Move to the previous item. Default: `↑`, `k`, `ctrl+p`.
    pub prev: key::Binding,
    /// Move to the next item, or to the first one when nothing is current.
    /// Default: `↓`, `j`, `ctrl+n`.
    pub next: key::Binding,
    /// Jump back to the first item. Default: `home`, `g`.
    pub first: key::Binding,
}

impl Default for CursorKeyMap {
    fn default() -> Self {
        Self {
            prev: key::Binding::new(vec![
                KeyPress::from(KeyCode::Up),
                KeyPress::from(KeyCode::Char('k')),
                KeyPress::from((KeyCode::Char('p'), KeyModifiers::CONTROL)),
            ])
            .with_help("↑/k", "up"),
            next: key::Binding::new(vec![
                KeyPress::from(KeyCode::Down),
                KeyPress::from(KeyCode::Char('j')),
                KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)),
            ])
            .with_help("↓/j", "down"),
            first: key::Binding::new(vec![
                KeyPress::from(KeyCode::Home),
                KeyPress::from(KeyCode::Char('g')),
            ])
            .with_help("g/home", "go to start"),
        }
    }
}

impl KeyMapTrait for CursorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev, &self.next]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev, &self.next, &self.first]]
    }
}

/// Construction settings for a cursor.
#[derive(Debug, Clone)]
pub struct Config {
    /// Style marker put on the current row. Must not be empty.
    pub highlight_class: String,
    /// Keyboard bindings handled by [`Model::update`].
    pub keymap: CursorKeyMap,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_CLASS)
    }
}

impl Config {
    /// Creates a config with the given highlight class and default bindings.
    pub fn new(highlight_class: impl Into<String>) -> Self {
        Self {
            highlight_class: highlight_class.into(),
            keymap: CursorKeyMap::default(),
        }
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: CursorKeyMap) -> Self {
        self.keymap = keymap;
        self
    }
}

/// The list cursor.
pub struct Model<L: ListAdapter> {
    /// Key bindings.
    pub keymap: CursorKeyMap,

    highlight_class: String,
    list: L,
    current_key: Option<L::Key>,
    diagnostics: Box<dyn Diagnostics>,
}

impl<L: ListAdapter + fmt::Debug> fmt::Debug for Model<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("highlight_class", &self.highlight_class)
            .field("current_key", &self.current_key.as_ref().map(ToString::to_string))
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

impl<L: ListAdapter> Model<L> {
    /// Builds a cursor that reports through `tracing`.
    ///
    /// # Errors
    ///
    /// Fails with [`CursorError::MissingHighlightClass`] when the highlight
    /// class is empty and [`CursorError::MissingScrollContainer`] when the
    /// adapter names no scroll container.
    pub fn new(config: Config, list: L) -> Result<Self> {
        Self::with_diagnostics(config, list, TracingDiagnostics)
    }

    /// Builds a cursor that reports to the given sink.
    ///
    /// Construction errors are reported to the sink as well as returned.
    ///
    /// # Errors
    ///
    /// Same as [`Model::new`].
    pub fn with_diagnostics(
        config: Config,
        list: L,
        diagnostics: impl Diagnostics + 'static,
    ) -> Result<Self> {
        let invalid = if config.highlight_class.trim().is_empty() {
            Some(CursorError::MissingHighlightClass)
        } else if list.scroll_container().trim().is_empty() {
            Some(CursorError::MissingScrollContainer)
        } else {
            None
        };
        if let Some(err) = invalid {
            diagnostics.report(&err);
            return Err(err);
        }
        Ok(Self::assemble(config, list, diagnostics))
    }

    // Builds a cursor from settings already known to be valid.
    pub(crate) fn assemble(
        config: Config,
        list: L,
        diagnostics: impl Diagnostics + 'static,
    ) -> Self {
        Self {
            keymap: config.keymap,
            highlight_class: config.highlight_class,
            list,
            current_key: None,
            diagnostics: Box::new(diagnostics),
        }
    }

    /// The style marker this cursor applies.
    pub fn highlight_class(&self) -> &str {
        &self.highlight_class
    }

    /// The list adapter.
    pub fn list(&self) -> &L {
        &self.list
    }

    /// Mutable access to the list adapter, for the owning widget to filter or
    /// redraw it. Follow up with [`Model::reset`] or [`Model::redraw`].
    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    /// Consumes the cursor and returns the list adapter.
    pub fn into_list(self) -> L {
        self.list
    }

    /// The current key, if any.
    pub fn get_key(&self) -> Option<&L::Key> {
        self.current_key.as_ref()
    }

    /// Removes the highlight and forgets the current key.
    ///
    /// The highlight is removed on a best-effort basis: if the row is gone
    /// the key is still forgotten.
    pub fn clear(&mut self) {
        let Some(key) = self.current_key.take() else {
            return;
        };
        if let Some(mut row) = self.list.find_row(&key, false) {
            row.remove_highlight(&self.highlight_class);
        }
    }

    /// Moves the highlight to `key`, rendering its row if needed.
    ///
    /// Going to the current key does nothing. Passing `None` or a key whose
    /// row cannot be produced is reported to diagnostics; in the latter case
    /// the cursor ends up with no current key.
    pub fn go_to(&mut self, key: impl Into<Option<L::Key>>) {
        let Some(key) = key.into() else {
            self.diagnostics.report(&CursorError::UnsetKey);
            return;
        };
        if self.current_key.as_ref() == Some(&key) {
            return;
        }

        self.clear();
        if !self.reveal(&key, true) {
            self.diagnostics.report(&CursorError::RowNotFound {
                key: key.to_string(),
            });
            return;
        }
        tracing::trace!(key = %key, "list cursor moved");
        self.current_key = Some(key);
    }

    /// Clears the highlight and moves to the first item, if there is one.
    pub fn reset(&mut self) {
        self.clear();
        if let Some(first) = self.list.first_key() {
            self.go_to(first);
        }
    }

    /// Re-applies highlight and scroll after the rows were rebuilt.
    ///
    /// A current key that is not rendered is left alone without a report.
    pub fn redraw(&mut self) {
        let Some(key) = self.current_key.clone() else {
            return;
        };
        if !self.reveal(&key, false) {
            tracing::debug!(key = %key, "current row not rendered during redraw");
        }
    }

    /// Moves to the previous item. Stays put at the start of the list.
    pub fn prev(&mut self) {
        let Some(key) = &self.current_key else {
            return;
        };
        if let Some(prev) = self.list.prev_key(key) {
            self.go_to(prev);
        }
    }

    /// Moves to the next item. Stays put at the end of the list; with no
    /// current key, behaves like [`Model::reset`].
    pub fn next(&mut self) {
        let Some(key) = &self.current_key else {
            self.reset();
            return;
        };
        if let Some(next) = self.list.next_key(key) {
            self.go_to(next);
        }
    }

    /// Returns true when `msg` is a key message bound in [`Model::keymap`].
    ///
    /// Owning widgets use this to decide whether a key belongs to the cursor
    /// before forwarding it to [`Model::update`].
    pub fn handles(&self, msg: &Msg) -> bool {
        msg.downcast_ref::<KeyMsg>().is_some_and(|key_msg| {
            key::matches(
                key_msg,
                &[&self.keymap.prev, &self.keymap.next, &self.keymap.first],
            )
        })
    }

    /// Update handles key messages using [`Model::keymap`].
    /// This is not a `bubbletea_rs::Model` implementation because the cursor is
    /// a sub-component driven by the widget that owns the list.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.prev.matches(key_msg) {
            self.prev();
        } else if self.keymap.next.matches(key_msg) {
            self.next();
        } else if self.keymap.first.matches(key_msg) {
            self.reset();
        }
        None
    }

    // Highlights the row for `key` and nudges the container so it is fully visible.
    fn reveal(&mut self, key: &L::Key, force_render: bool) -> bool {
        let offsets = match self.list.find_row(key, force_render) {
            Some(mut row) => {
                row.apply_highlight(&self.highlight_class);
                row.offsets()
            }
            None => return false,
        };

        let delta = scroll_delta(offsets.top, offsets.bottom, self.list.container_height());
        if delta != 0 {
            self.list.scroll_by(delta);
        }
        true
    }
}

/// Create a new cursor. Equivalent to `Model::new(config, list)`.
///
/// # Errors
///
/// See [`Model::new`].
pub fn new<L: ListAdapter>(config: Config, list: L) -> Result<Model<L>> {
    Model::new(config, list)
}
