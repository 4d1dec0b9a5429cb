//! file-grid: a file-browser grid controller synced to an HTTP file
//! listing.
//!
//! The grid widget is an external component; this crate builds its
//! configuration, formats its cells, owns its row collection, and
//! bridges its lifecycle events (delete, upload, move) to a REST files
//! resource.

pub mod api;
pub mod error;
pub mod grid;
pub mod models;
pub mod sync;
