//! Synchronization layer.
//!
//! Bridges grid widget lifecycle events (before-delete, after-upload,
//! before-move) to backend calls, and owns the initial listing load.
//! Delegates all HTTP interactions to the `api` layer and all row
//! mutation to the `grid` controller.

pub mod bridge;
