//! Connection Health
//!
//! Per-connector health samples and their roll-up into one system verdict:
//!
//! - **types**: health statuses, samples and the derived system health
//! - **aggregate**: the worst-case-wins reduction over a set of samples
//! - **monitor**: latest-sample-per-connector view fed by polling
//! - **probe**: the async seam through which samples are collected
//!
//! Aggregation is pure. Polling cadence belongs to the caller.

pub mod aggregate;
pub mod monitor;
pub mod probe;
pub mod types;

pub use aggregate::*;
pub use monitor::*;
pub use probe::*;
pub use types::*;
