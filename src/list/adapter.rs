//! [`ListAdapter`] implementation for the in-memory list.

use super::types::{Item, RowRef};
use super::Model;
use crate::adapter::{ListAdapter, RowOffsets};

impl<I: Item> ListAdapter for Model<I> {
    type Key = String;
    type Row<'a>
        = RowRef<'a>
    where
        Self: 'a;

    fn first_key(&self) -> Option<String> {
        self.key_at(0)
    }

    fn prev_key(&self, key: &String) -> Option<String> {
        let pos = *self.positions.get(key)?;
        self.key_at(pos.checked_sub(1)?)
    }

    fn next_key(&self, key: &String) -> Option<String> {
        let pos = *self.positions.get(key)?;
        self.key_at(pos + 1)
    }

    fn find_row(&mut self, key: &String, force_render: bool) -> Option<RowRef<'_>> {
        let pos = *self.positions.get(key)?;
        if pos >= self.rendered.len() {
            if !force_render {
                return None;
            }
            self.render_through(pos + 1);
            tracing::trace!(key = %key, rendered = self.rendered.len(), "rendered rows on demand");
        }

        let y_offset = lines(self.viewport.y_offset());
        let row = self.rendered.get_mut(pos)?;
        let offsets = RowOffsets::new(lines(row.top).saturating_sub(y_offset), lines(row.height()));
        Some(RowRef {
            classes: &mut row.classes,
            offsets,
        })
    }

    fn scroll_container(&self) -> &str {
        &self.scroll_container
    }

    fn container_height(&self) -> i32 {
        lines(self.viewport.height)
    }

    fn scroll_by(&mut self, delta: i32) {
        self.viewport.scroll_by(delta);
    }
}

// Line counts past `i32::MAX` clamp instead of wrapping.
fn lines(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
