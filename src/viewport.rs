//! Scroll container state and the minimal-motion scroll policy.
//!
//! [`Model`] tracks a vertical scroll offset over content of a known height.
//! [`scroll_delta`] computes how far a container must move so a row becomes
//! fully visible, nudging only as much as needed and never re-centering.
//!
//! ### Example
//! ```rust
//! use list_cursor::viewport::{self, scroll_delta};
//!
//! let mut viewport = viewport::new(40, 10);
//! viewport.set_content_height(25);
//!
//! // A row spanning lines 12..14 sits below the fold by 4 lines.
//! let delta = scroll_delta(12, 14, viewport.height as i32);
//! assert_eq!(delta, 4);
//! viewport.scroll_by(delta);
//! assert_eq!(viewport.y_offset(), 4);
//! ```

/// Returns the signed scroll adjustment that brings a row into view.
///
/// `elem_top` and `elem_bottom` are the row's edges relative to the current
/// scroll position; `container_height` is the visible height.
///
/// - Row top above the fold: scroll up to the row's top, but not further than
///   needed to keep its bottom visible. Never scrolls down.
/// - Row bottom below the fold: scroll down until the bottom is visible, but
///   not past bringing the top to the viewport's top. Never scrolls up.
/// - Row fully visible: `0`.
///
/// ```rust
/// use list_cursor::viewport::scroll_delta;
///
/// assert_eq!(scroll_delta(-50, -10, 100), -50);
/// assert_eq!(scroll_delta(10, 50, 100), 0);
/// assert_eq!(scroll_delta(80, 150, 100), 50);
/// ```
pub fn scroll_delta(elem_top: i32, elem_bottom: i32, container_height: i32) -> i32 {
    let overflow = elem_bottom.saturating_sub(container_height);
    if elem_top < 0 {
        elem_top.max(overflow).min(0)
    } else if elem_bottom > container_height {
        elem_top.min(overflow).max(0)
    } else {
        0
    }
}

/// Vertical scroll state for a fixed-height container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Display width in columns.
    pub width: usize,
    /// Visible height in lines.
    pub height: usize,
    y_offset: usize,
    content_height: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Model {
    /// Creates a viewport scrolled to the top with no content.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            y_offset: 0,
            content_height: 0,
        }
    }

    /// Sets both dimensions (builder pattern).
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self.clamp();
        self
    }

    /// Resizes the viewport, keeping the offset within bounds.
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    /// Sets the total height of the scrollable content.
    pub fn set_content_height(&mut self, content_height: usize) {
        self.content_height = content_height;
        self.clamp();
    }

    /// Total height of the scrollable content.
    pub fn content_height(&self) -> usize {
        self.content_height
    }

    /// Current scroll position: the first visible content line.
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// Sets the scroll position, clamped to the scrollable range.
    pub fn set_y_offset(&mut self, n: usize) {
        self.y_offset = n.min(self.max_y_offset());
    }

    /// Moves the scroll position by `delta` lines, clamped like a browser's
    /// `scrollTop`.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = if delta < 0 {
            self.y_offset.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.y_offset.saturating_add(delta as usize)
        };
        self.set_y_offset(target);
    }

    /// Scrolls back to the first line.
    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    /// Returns true when the first content line is visible.
    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    /// Returns true when the last content line is visible.
    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Half-open range of content lines currently visible.
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.y_offset + self.height).min(self.content_height);
        (self.y_offset.min(end), end)
    }

    /// Vertical scroll progress between 0.0 and 1.0.
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_y_offset();
        if max == 0 {
            return 1.0;
        }
        (self.y_offset as f64 / max as f64).clamp(0.0, 1.0)
    }

    fn max_y_offset(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }
}

/// Create a new viewport. Equivalent to `Model::new(width, height)`.
pub fn new(width: usize, height: usize) -> Model {
    Model::new(width, height)
}
