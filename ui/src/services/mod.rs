//! Infrastructure Services
//!
//! Supporting services for the dashboard state:
//!
//! - **config**: Dashboard configuration with defaults and validation
//! - **errors**: Error types for catalog loading, configuration and health probes

pub mod config;
pub mod errors;
