//! Styling for list rows.
//!
//! Rows carrying any highlight marker are drawn with `highlighted`, all other
//! rows with `normal`. Lines wider than the viewport are cut and end with
//! [`ELLIPSIS`].
//!
//! ```rust
//! use list_cursor::list::style::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.highlighted = Style::new().foreground(Color::from("#EE6FF8")).bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Unicode ellipsis (`…`) appended to truncated lines.
pub const ELLIPSIS: &str = "…";

/// Styles used by [`Model::view`](super::Model::view).
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Style for rows without a highlight marker.
    pub normal: Style,
    /// Style for rows with a highlight marker.
    pub highlighted: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            normal: Style::new().foreground(Color::from("#dddddd")),
            highlighted: Style::new()
                .foreground(Color::from("#EE6FF8"))
                .bold(true),
        }
    }
}
