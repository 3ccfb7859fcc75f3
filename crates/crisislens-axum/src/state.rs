//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AxumContext`; every service inside is immutable,
/// so concurrent requests need no locking.
pub type AppState = Arc<AxumContext>;
