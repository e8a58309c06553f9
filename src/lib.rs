//! TUI Skyline (workspace facade crate).
//!
//! This package keeps the public `tui_skyline::{core,term,types}` API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use tui_skyline_core as core;
pub use tui_skyline_term as term;
pub use tui_skyline_types as types;
