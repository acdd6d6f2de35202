//! Connector Catalog
//!
//! Read-only registry of the integrations the migration product supports,
//! plus the filtered views the search and browse UI renders:
//!
//! - **types**: connector descriptors, categories and query parameters
//! - **index**: the validated catalog and its stable filter
//! - **registry**: the registry document bundled with the crate

pub mod index;
pub mod registry;
pub mod types;

pub use index::*;
pub use registry::*;
pub use types::*;
