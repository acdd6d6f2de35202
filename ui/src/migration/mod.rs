//! Migration Run Tracking
//!
//! The state the progress bar and completion footer render while a migration
//! job runs on the backend. The job itself is driven elsewhere; this module
//! only tracks what the UI has been told about it.
//!
//! - **run**: the idle/loading/success/error state machine and its display text
//! - **stage**: named record-transfer stages keyed by progress
//! - **demo**: the simulated run shown on marketing and wizard pages

pub mod demo;
pub mod run;
pub mod stage;

pub use demo::*;
pub use run::*;
pub use stage::*;
