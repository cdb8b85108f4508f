//! Drawing of the rows inside the viewport.

use super::style::ELLIPSIS;
use super::types::{Item, RenderedRow};
use super::Model;
use unicode_width::UnicodeWidthChar;

impl<I: Item> Model<I> {
    /// Renders the rows that fall inside the viewport.
    ///
    /// Only rendered rows are drawn; rows past the last rendered batch are
    /// not part of the scrollable content until they are rendered.
    pub fn view(&self) -> String {
        let (start, end) = self.viewport.visible_range();
        let width = self.viewport.width;

        let mut lines = Vec::with_capacity(end.saturating_sub(start));
        for row in self.rows_between(start, end) {
            let style = if row.classes.is_empty() {
                &self.styles.normal
            } else {
                &self.styles.highlighted
            };
            for (i, line) in row.lines.iter().enumerate() {
                let y = row.top + i;
                if y < start || y >= end {
                    continue;
                }
                lines.push(style.render(&truncate(line, width)));
            }
        }
        lines.join("\n")
    }

    fn rows_between(&self, start: usize, end: usize) -> impl Iterator<Item = &RenderedRow> {
        self.rendered
            .iter()
            .skip_while(move |row| row.bottom() <= start)
            .take_while(move |row| row.top < end)
    }
}

/// Cuts `line` to `width` display columns, ending with an ellipsis when cut.
/// A width of zero leaves the line untouched.
pub(super) fn truncate(line: &str, width: usize) -> String {
    if width == 0 {
        return line.to_string();
    }
    let total: usize = line.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return line.to_string();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}
