//! Grid adapter: widget configuration, cell formatters, and the owned
//! row controller.
//!
//! The grid widget itself is an external component; this module builds
//! its options, formats its cells, and owns the row collection it
//! displays. Called by the `sync` layer when backend state changes.

pub mod config;
pub mod controller;
pub mod format;
