// Connector catalog types - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::errors::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorCategory {
    Crm,
    Marketing,
    Communication,
    Analytics,
    Productivity,
    Payment,
    Storage,
    Custom,
}

impl ConnectorCategory {
    pub const ALL: [ConnectorCategory; 8] = [
        ConnectorCategory::Crm,
        ConnectorCategory::Marketing,
        ConnectorCategory::Communication,
        ConnectorCategory::Analytics,
        ConnectorCategory::Productivity,
        ConnectorCategory::Payment,
        ConnectorCategory::Storage,
        ConnectorCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorCategory::Crm => "crm",
            ConnectorCategory::Marketing => "marketing",
            ConnectorCategory::Communication => "communication",
            ConnectorCategory::Analytics => "analytics",
            ConnectorCategory::Productivity => "productivity",
            ConnectorCategory::Payment => "payment",
            ConnectorCategory::Storage => "storage",
            ConnectorCategory::Custom => "custom",
        }
    }

    /// Human-readable label for filter chips and headings
    pub fn label(&self) -> &'static str {
        match self {
            ConnectorCategory::Crm => "CRM",
            ConnectorCategory::Marketing => "Marketing",
            ConnectorCategory::Communication => "Communication",
            ConnectorCategory::Analytics => "Analytics",
            ConnectorCategory::Productivity => "Productivity",
            ConnectorCategory::Payment => "Payment",
            ConnectorCategory::Storage => "Storage",
            ConnectorCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for ConnectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectorCategory {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        ConnectorCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory {
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupComplexity {
    Simple,
    Moderate,
    Complex,
}

impl SetupComplexity {
    pub fn label(&self) -> &'static str {
        match self {
            SetupComplexity::Simple => "Simple setup",
            SetupComplexity::Moderate => "Moderate setup",
            SetupComplexity::Complex => "Complex setup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorFeature {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One supported integration as listed in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ConnectorCategory,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub features: Vec<ConnectorFeature>,
    #[serde(rename = "setupComplexity")]
    pub setup_complexity: SetupComplexity,
}

/// Category predicate of a catalog query; `All` is the "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ConnectorCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ConnectorCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Value used in `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            value.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<ConnectorCategory> for CategoryFilter {
    fn from(category: ConnectorCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Search/browse parameters. The default query matches every connector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub popular_only: bool,
}

impl CatalogQuery {
    pub fn new(search: impl Into<String>, category: CategoryFilter, popular_only: bool) -> Self {
        Self {
            search: search.into(),
            category,
            popular_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in ConnectorCategory::ALL {
            assert_eq!(category.as_str().parse::<ConnectorCategory>().unwrap(), category);
        }
        assert_eq!(" CRM ".parse::<ConnectorCategory>().unwrap(), ConnectorCategory::Crm);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "erp".parse::<ConnectorCategory>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { ref value } if value == "erp"));
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "payment".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ConnectorCategory::Payment)
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_matching() {
        assert!(CategoryFilter::All.matches(ConnectorCategory::Storage));
        assert!(CategoryFilter::Only(ConnectorCategory::Crm).matches(ConnectorCategory::Crm));
        assert!(!CategoryFilter::Only(ConnectorCategory::Crm).matches(ConnectorCategory::Marketing));
    }

    #[test]
    fn test_descriptor_deserializes_registry_shape() {
        let json = r#"{
            "id": "close",
            "name": "Close",
            "description": "Sales CRM built for inside sales teams",
            "category": "crm",
            "setupComplexity": "simple"
        }"#;
        let descriptor: ConnectorDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.category, ConnectorCategory::Crm);
        assert_eq!(descriptor.setup_complexity, SetupComplexity::Simple);
        assert!(!descriptor.popular);
        assert!(descriptor.features.is_empty());
    }
}
