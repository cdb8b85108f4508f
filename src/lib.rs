#![warn(missing_docs)]

//! # list-cursor
//!
//! A keyboard-navigable highlight cursor for lists that someone else owns and
//! renders, built for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! A [`ListCursor`] remembers which single item of a list is current, keeps
//! that row marked with a highlight class and nudges the scroll container
//! just enough to show it. The list itself stays with the widget that owns
//! it: the cursor only talks to it through the [`ListAdapter`] trait, so the
//! list can be filtered, re-rendered or emptied at any time.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | `cursor` | The list cursor and its key bindings |
//! | `adapter` | `ListAdapter` and `RowHandle`, the capability a list provides |
//! | `list` | An in-memory, filterable, progressively rendered list |
//! | `picker` | A type-to-filter picker combining a list and a cursor |
//! | `viewport` | Scroll state and the minimal-motion scroll policy |
//! | `diagnostics` | Sinks for contract violations the cursor absorbs |
//!
//! ## Navigation
//!
//! ```rust
//! use list_cursor::prelude::*;
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
//! let users = List::new(vec![User("iago"), User("othello"), User("hamlet")], 30, 10);
//! let mut cursor = ListCursor::new(CursorConfig::new("highlighted_user"), users)?;
//!
//! cursor.next(); // nothing current yet: goes to the first user
//! cursor.next();
//! assert_eq!(cursor.get_key().map(String::as_str), Some("othello"));
//!
//! // Membership changed: reset instead of redraw.
//! cursor.list_mut().set_filter("ham");
//! cursor.reset();
//! assert_eq!(cursor.get_key().map(String::as_str), Some("hamlet"));
//! # Ok::<(), list_cursor::CursorError>(())
//! ```
//!
//! ## Diagnostics
//!
//! Navigation never returns errors. Calling `go_to(None)`, or going to a key
//! whose row cannot be rendered, is reported to a [`Diagnostics`] sink
//! (by default as `tracing` error events). Stale keys left behind by a list
//! change are ignored silently.

pub mod adapter;
pub mod cursor;
pub mod diagnostics;
pub mod error;
pub mod key;
pub mod list;
pub mod picker;
pub mod viewport;

pub use adapter::{ListAdapter, RowHandle, RowOffsets};
pub use cursor::{Config as CursorConfig, CursorKeyMap, Model as ListCursor};
pub use diagnostics::{Collector, Diagnostics, TracingDiagnostics};
pub use error::{CursorError, Result};
pub use key::{Binding, KeyMap, KeyPress};
pub use list::{Item, ListStyles, Model as List};
pub use picker::Model as Picker;
pub use viewport::{scroll_delta, Model as Viewport};

/// Prelude module for convenient imports.
///
/// ```rust
/// use list_cursor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::{ListAdapter, RowHandle, RowOffsets};
    pub use crate::cursor::{Config as CursorConfig, CursorKeyMap, Model as ListCursor};
    pub use crate::diagnostics::{Collector, Diagnostics, TracingDiagnostics};
    pub use crate::error::CursorError;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::list::{Item, ListStyles, Model as List};
    pub use crate::picker::Model as Picker;
    pub use crate::viewport::{scroll_delta, Model as Viewport};
}
