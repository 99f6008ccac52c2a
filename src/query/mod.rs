//! Query cache: keyed async data with staleness and eviction.
//!
//! The [`QueryClient`] owns every remote dataset the pages read. Pages ask
//! for a [`QuerySnapshot`] by key; the client records keys that need
//! fetching, and the app loop spawns the actual fetch tasks and stores the
//! results back.

pub mod client;

pub use client::QueryClient;

use std::sync::Arc;

// ---------------------------------------------------------------------------
// QuerySnapshot
// ---------------------------------------------------------------------------

/// A point-in-time view of one cached query.
///
/// Exactly one of the three render states holds: loading (no data, fetch in
/// flight), error (fetch failed, no data), ready (data present — possibly
/// stale, with a refetch already recorded).
#[derive(Debug, Clone)]
pub struct QuerySnapshot<T> {
    pub data: Option<Arc<T>>,
    pub is_loading: bool,
    pub is_error: bool,
    pub error: Option<String>,
}

impl<T> QuerySnapshot<T> {
    /// A loading snapshot.
    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            is_error: false,
            error: None,
        }
    }

    /// An error snapshot with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            is_loading: false,
            is_error: true,
            error: Some(message.into()),
        }
    }

    /// A ready snapshot holding data.
    pub fn ready(data: Arc<T>) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
            is_error: false,
            error: None,
        }
    }
}
