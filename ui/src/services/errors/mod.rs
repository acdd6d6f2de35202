use thiserror::Error;

/// Errors raised while building or querying the connector catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate connector id in registry: {id}")]
    DuplicateId { id: String },

    #[error("Unknown connector category: {value}")]
    UnknownCategory { value: String },

    #[error("Connector registry parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

/// Configuration loading and validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },
}

/// Failure reported by a single connector health probe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("Connector unreachable: {message}")]
    Unreachable { message: String },

    #[error("Health check timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("Connector credentials rejected: {message}")]
    Unauthorized { message: String },

    #[error("Health check failed: {message}")]
    Other { message: String },
}

impl ProbeError {
    /// Whether the next poll may reasonably succeed without user action.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ProbeError::Unreachable { .. } | ProbeError::Timeout { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Probe(#[from] ProbeError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
