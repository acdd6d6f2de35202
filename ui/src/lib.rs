//! Browser-side control layer for the CRM migration dashboard.
//!
//! The state primitives (`state`, `catalog`, `health`, `migration`) carry the
//! invariants the UI relies on while migration work is in flight; the
//! `components` and `app` modules only render what they produce.

pub mod app;
pub use app::MigrationDashboard;

pub mod catalog;
pub mod components;
pub mod health;
pub mod migration;
pub mod services;
pub mod state;
pub mod utils;
