//! Diagnostics sinks for list cursor contract violations.
//!
//! The cursor never panics or returns errors from its navigation methods.
//! Caller mistakes and unexpected resolution failures are instead handed to a
//! [`Diagnostics`] implementation. The default, [`TracingDiagnostics`], emits
//! them as `tracing` error events; [`Collector`] keeps them in memory so a
//! host (or a test) can inspect what went wrong.
//!
//! ### Example
//! ```rust
//! use list_cursor::diagnostics::{Collector, Diagnostics};
//! use list_cursor::CursorError;
//!
//! let collector = Collector::new();
//! collector.report(&CursorError::UnsetKey);
//! assert_eq!(collector.reports(), vec![CursorError::UnsetKey]);
//! ```

use crate::error::CursorError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A sink that receives errors the cursor absorbs instead of returning.
///
/// Sinks are `Send` so a cursor can live inside a `bubbletea_rs::Model`.
pub trait Diagnostics: Send {
    /// Records a single error.
    fn report(&self, error: &CursorError);
}

/// Reports errors as `tracing` events at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, error: &CursorError) {
        match error {
            CursorError::RowNotFound { key } => {
                tracing::error!(key = %key, "{}", error);
            }
            _ => tracing::error!("{}", error),
        }
    }
}

/// Keeps every reported error in memory.
///
/// Clones share the same buffer, so one clone can be handed to a cursor
/// while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    reports: Arc<Mutex<Vec<CursorError>>>,
}

impl Collector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far, oldest first.
    pub fn reports(&self) -> Vec<CursorError> {
        self.lock().clone()
    }

    /// Number of reports received.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops all recorded reports.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CursorError>> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Diagnostics for Collector {
    fn report(&self, error: &CursorError) {
        // Also forwarded to tracing so collected reports stay visible in logs.
        TracingDiagnostics.report(error);
        self.lock().push(error.clone());
    }
}

impl<D: Diagnostics + Sync + ?Sized> Diagnostics for Arc<D> {
    fn report(&self, error: &CursorError) {
        (**self).report(error);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Box<D> {
    fn report(&self, error: &CursorError) {
        (**self).report(error);
    }
}
