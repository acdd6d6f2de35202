//! Registry document loading.

use serde::{Deserialize, Serialize};

use super::index::ConnectorCatalog;
use super::types::ConnectorDescriptor;
use crate::services::errors::CatalogError;

const BUILTIN_REGISTRY: &str = include_str!("../../assets/connectors.json");

/// On-disk shape of a connector registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDocument {
    pub connectors: Vec<ConnectorDescriptor>,
}

impl ConnectorCatalog {
    /// Parses and validates a registry document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: RegistryDocument = serde_json::from_str(json)?;
        Self::new(document.connectors)
    }

    /// The registry bundled with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_REGISTRY)
    }
}
