//! Type-to-filter picker: a list with a highlight cursor and a search query.
//!
//! The picker shows how an owning widget drives the cursor. Typing narrows
//! the list and resets the cursor to the first match; arrow keys move the
//! highlight. Letters go to the query, so the picker's cursor bindings leave
//! out the `j`/`k`/`g` shortcuts.
//!
//! ### Example
//! ```rust
//! use list_cursor::list::Item;
//! use list_cursor::picker;
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! #[derive(Clone)]
//! struct Stream(&'static str);
//!
//! impl std::fmt::Display for Stream {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "#{}", self.0)
//!     }
//! }
//!
//! impl Item for Stream {
//!     fn key(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! let streams = vec![Stream("general"), Stream("design"), Stream("devel")];
//! let mut p = picker::new(streams, 30, 6).unwrap();
//!
//! for c in "de".chars() {
//!     let msg = Box::new(KeyMsg { key: KeyCode::Char(c), modifiers: KeyModifiers::NONE }) as Msg;
//!     p.update(&msg);
//! }
//! assert_eq!(p.selected().map(|s| s.0), Some("design"));
//! ```

use crate::cursor::{self, Config, CursorKeyMap};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::Result;
use crate::key::{Binding, KeyPress};
use crate::list::{self, Item};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// Highlight class the picker applies to the current row.
pub const PICKER_HIGHLIGHT_CLASS: &str = "picker_selected";

/// Scroll container identifier of the picker's list.
pub const PICKER_SCROLL_CONTAINER: &str = "picker";

/// Cursor bindings that do not collide with typing.
pub fn picker_keymap() -> CursorKeyMap {
    CursorKeyMap {
        prev: Binding::new(vec![
            KeyPress::from(KeyCode::Up),
            KeyPress::from((KeyCode::Char('p'), KeyModifiers::CONTROL)),
        ])
        .with_help("↑/ctrl+p", "up"),
        next: Binding::new(vec![
            KeyPress::from(KeyCode::Down),
            KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)),
        ])
        .with_help("↓/ctrl+n", "down"),
        first: Binding::new(vec![KeyCode::Home]).with_help("home", "go to start"),
    }
}

/// The picker model.
#[derive(Debug)]
pub struct Model<I: Item> {
    /// Text shown before the query.
    pub prompt: String,

    cursor: cursor::Model<list::Model<I>>,
    query: String,
}

impl<I: Item> Model<I> {
    /// Creates a picker whose list fills `height - 1` lines under the prompt.
    ///
    /// # Errors
    ///
    /// Propagates cursor construction errors.
    pub fn new(items: Vec<I>, width: usize, height: usize) -> Result<Self> {
        Self::with_diagnostics(items, width, height, TracingDiagnostics)
    }

    /// Like [`Model::new`] with an explicit diagnostics sink.
    ///
    /// # Errors
    ///
    /// Propagates cursor construction errors.
    pub fn with_diagnostics(
        items: Vec<I>,
        width: usize,
        height: usize,
        diagnostics: impl Diagnostics + 'static,
    ) -> Result<Self> {
        let cursor = cursor::Model::with_diagnostics(
            picker_config(),
            picker_list(items, width, height),
            diagnostics,
        )?;
        Ok(Self::from_cursor(cursor))
    }

    fn from_cursor(mut cursor: cursor::Model<list::Model<I>>) -> Self {
        cursor.reset();
        Self {
            prompt: "> ".to_string(),
            cursor,
            query: String::new(),
        }
    }

    /// The current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query, refilters and moves to the first match.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.apply_query();
    }

    /// The highlighted item, if any.
    pub fn selected(&self) -> Option<&I> {
        let key = self.cursor.get_key()?;
        self.cursor.list().item(key)
    }

    /// The cursor driving the highlight.
    pub fn cursor(&self) -> &cursor::Model<list::Model<I>> {
        &self.cursor
    }

    /// Replaces the items, keeping the query.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.cursor.list_mut().set_items(items);
        self.cursor.list_mut().set_filter(&self.query);
        self.cursor.reset();
    }

    /// Returns true when `msg` would move the highlight or edit the query.
    ///
    /// `Backspace` and `Esc` on an empty query are left to the host.
    pub fn handles(&self, msg: &Msg) -> bool {
        self.cursor.handles(msg)
            || msg
                .downcast_ref::<KeyMsg>()
                .is_some_and(|key_msg| self.edits_query(key_msg))
    }

    /// Handles navigation and query editing keys.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if self.cursor.handles(msg) {
            return self.cursor.update(msg);
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if !self.edits_query(key_msg) {
            return None;
        }
        match key_msg.key {
            KeyCode::Char(c) => self.query.push(c),
            KeyCode::Backspace => {
                self.query.pop();
            }
            _ => self.query.clear(),
        }
        self.apply_query();
        None
    }

    /// Renders the prompt line followed by the list.
    pub fn view(&self) -> String {
        format!("{}{}\n{}", self.prompt, self.query, self.cursor.list().view())
    }

    fn edits_query(&self, key_msg: &KeyMsg) -> bool {
        match key_msg.key {
            KeyCode::Char(_) => !key_msg
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
            KeyCode::Backspace | KeyCode::Esc => !self.query.is_empty(),
            _ => false,
        }
    }

    fn apply_query(&mut self) {
        self.cursor.list_mut().set_filter(&self.query);
        self.cursor.reset();
    }
}

impl<I: Item + Send + 'static> BubbleTeaModel for Model<I> {
    /// Starts an empty 80x24 picker; fill it with [`Model::set_items`].
    fn init() -> (Self, Option<Cmd>) {
        let cursor = cursor::Model::assemble(
            picker_config(),
            picker_list(Vec::new(), 80, 24),
            TracingDiagnostics,
        );
        (Self::from_cursor(cursor), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

fn picker_config() -> Config {
    Config::new(PICKER_HIGHLIGHT_CLASS).with_keymap(picker_keymap())
}

// The prompt takes the first line.
fn picker_list<I: Item>(items: Vec<I>, width: usize, height: usize) -> list::Model<I> {
    list::new(items, width, height.saturating_sub(1))
        .with_scroll_container(PICKER_SCROLL_CONTAINER)
}

/// Create a new picker. Equivalent to `Model::new(items, width, height)`.
///
/// # Errors
///
/// See [`Model::new`].
pub fn new<I: Item>(items: Vec<I>, width: usize, height: usize) -> Result<Model<I>> {
    Model::new(items, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Collector;
    use lipgloss_extras::lipgloss;
    use std::fmt;

    #[derive(Debug, Clone)]
    struct Stream(&'static str);

    impl fmt::Display for Stream {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "#{}", self.0)
        }
    }

    impl Item for Stream {
        fn key(&self) -> String {
            self.0.to_string()
        }
    }

    fn streams() -> Vec<Stream> {
        ["general", "design", "devel", "announce", "social", "kitchen"]
            .into_iter()
            .map(Stream)
            .collect()
    }

    fn press(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn picker() -> (Model<Stream>, Collector) {
        let collector = Collector::new();
        let p = Model::with_diagnostics(streams(), 30, 4, collector.clone()).expect("picker");
        (p, collector)
    }

    #[test]
    fn test_starts_on_first_item() {
        let (p, _) = picker();
        assert_eq!(p.selected().map(|s| s.0), Some("general"));
        assert!(p
            .cursor()
            .list()
            .is_highlighted("general", PICKER_HIGHLIGHT_CLASS));
    }

    #[test]
    fn test_typing_filters_and_resets() {
        let (mut p, diag) = picker();
        assert!(p.update(&press(KeyCode::Down)).is_none());
        assert_eq!(p.selected().map(|s| s.0), Some("design"));

        p.update(&press(KeyCode::Char('k')));
        assert_eq!(p.query(), "k");
        assert_eq!(p.selected().map(|s| s.0), Some("kitchen"));

        p.update(&press(KeyCode::Backspace));
        assert_eq!(p.query(), "");
        assert_eq!(p.selected().map(|s| s.0), Some("general"));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_no_matches_then_matches_again() {
        let (mut p, diag) = picker();
        p.set_query("zzz");
        assert!(p.selected().is_none());
        p.update(&press(KeyCode::Down));
        assert!(p.selected().is_none());

        p.update(&press(KeyCode::Esc));
        assert_eq!(p.selected().map(|s| s.0), Some("general"));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_navigation_scrolls_list() {
        let (mut p, _) = picker();
        // Three list lines under the prompt.
        for _ in 0..4 {
            p.update(&press(KeyCode::Down));
        }
        assert_eq!(p.selected().map(|s| s.0), Some("social"));
        assert_eq!(p.cursor().list().viewport().y_offset(), 2);

        let view = lipgloss::strip_ansi(&p.view());
        let lines: Vec<&str> = view.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec![">", "#devel", "#announce", "#social"]);
    }

    #[test]
    fn test_handled_keys() {
        let (mut p, _) = picker();
        assert!(p.handles(&press(KeyCode::Down)));
        assert!(p.handles(&press(KeyCode::Char('j'))));
        assert!(!p.handles(&press(KeyCode::Backspace)));
        assert!(!p.handles(&press(KeyCode::Esc)));
        assert!(!p.handles(&press(KeyCode::Tab)));
        let ctrl_c = Box::new(KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg;
        assert!(!p.handles(&ctrl_c));

        p.update(&press(KeyCode::Char('s')));
        assert!(p.handles(&press(KeyCode::Backspace)));
        assert!(p.handles(&press(KeyCode::Esc)));
    }

    #[test]
    fn test_runs_as_bubbletea_model() {
        let (mut p, cmd) = <Model<Stream> as BubbleTeaModel>::init();
        assert!(cmd.is_none());
        assert!(p.selected().is_none());

        p.set_items(streams());
        assert_eq!(p.selected().map(|s| s.0), Some("general"));

        assert!(BubbleTeaModel::update(&mut p, press(KeyCode::Down)).is_none());
        assert_eq!(p.selected().map(|s| s.0), Some("design"));

        let view = lipgloss::strip_ansi(&BubbleTeaModel::view(&p));
        assert_eq!(view.lines().next().map(str::trim_end), Some(">"));
        assert!(view.contains("#design"));
    }

    #[test]
    fn test_set_items_keeps_query() {
        let (mut p, _) = picker();
        p.set_query("de");
        p.set_items(vec![Stream("code-review"), Stream("devops"), Stream("random")]);
        assert_eq!(p.cursor().list().visible_keys(), vec!["code-review", "devops"]);
        assert_eq!(p.selected().map(|s| s.0), Some("code-review"));
    }
}
