//! User Interface Components
//!
//! Dioxus components that render the dashboard state. They only read values
//! and forward user intent through event handlers; all state transitions
//! happen in the state primitives.
//!
//! - **display**: busy overlay, connection health panel, run status footer
//! - **forms**: connector search and category selection
//! - **input**: search and toggle inputs

pub mod display;
pub mod forms;
pub mod input;
