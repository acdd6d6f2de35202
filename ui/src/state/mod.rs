//! Process-wide UI state shared across the dashboard.

pub mod busy;

pub use busy::*;
