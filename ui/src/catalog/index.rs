//! Filterable index over the connector registry.

use std::collections::HashSet;

use tracing::debug;

use super::types::{CatalogQuery, ConnectorCategory, ConnectorDescriptor};
use crate::services::errors::CatalogError;

/// Immutable, validated connector registry.
///
/// Connector ids are unique. Every query returns connectors in registry order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectorCatalog {
    connectors: Vec<ConnectorDescriptor>,
}

impl ConnectorCatalog {
    pub fn new(connectors: Vec<ConnectorDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(connectors.len());
        for connector in &connectors {
            if !seen.insert(connector.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: connector.id.clone(),
                });
            }
        }

        debug!(connectors = connectors.len(), "connector catalog built");
        Ok(Self { connectors })
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConnectorDescriptor> {
        self.connectors.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ConnectorDescriptor> {
        self.connectors.iter().find(|connector| connector.id == id)
    }

    /// Connectors matching the search term, the category and the popular flag.
    ///
    /// The search term matches case-insensitively against the name or the
    /// description; only the empty term matches everything.
    pub fn filter(&self, query: &CatalogQuery) -> Vec<&ConnectorDescriptor> {
        let term = query.search.to_lowercase();

        self.connectors
            .iter()
            .filter(|connector| matches_search(connector, &term))
            .filter(|connector| query.category.matches(connector.category))
            .filter(|connector| !query.popular_only || connector.popular)
            .collect()
    }

    pub fn popular(&self) -> Vec<&ConnectorDescriptor> {
        self.connectors.iter().filter(|c| c.popular).collect()
    }

    /// Distinct categories in first-seen registry order.
    pub fn categories(&self) -> Vec<ConnectorCategory> {
        let mut categories = Vec::new();
        for connector in &self.connectors {
            if !categories.contains(&connector.category) {
                categories.push(connector.category);
            }
        }
        categories
    }

    /// Connector count per category, in [`categories`](Self::categories) order.
    pub fn count_by_category(&self) -> Vec<(ConnectorCategory, usize)> {
        self.categories()
            .into_iter()
            .map(|category| {
                let count = self
                    .connectors
                    .iter()
                    .filter(|c| c.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

fn matches_search(connector: &ConnectorDescriptor, lowered_term: &str) -> bool {
    lowered_term.is_empty()
        || connector.name.to_lowercase().contains(lowered_term)
        || connector.description.to_lowercase().contains(lowered_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{CategoryFilter, SetupComplexity};

    fn connector(id: &str, name: &str, description: &str, category: ConnectorCategory, popular: bool) -> ConnectorDescriptor {
        ConnectorDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            popular,
            features: Vec::new(),
            setup_complexity: SetupComplexity::Simple,
        }
    }

    fn sample_catalog() -> ConnectorCatalog {
        ConnectorCatalog::new(vec![
            connector("hubspot", "HubSpot", "Inbound marketing and sales CRM", ConnectorCategory::Crm, true),
            connector("mailchimp", "Mailchimp", "Email campaigns and audiences", ConnectorCategory::Marketing, true),
            connector("pipedrive", "Pipedrive", "Pipeline-focused sales CRM", ConnectorCategory::Crm, false),
            connector("slack", "Slack", "Team messaging and notifications", ConnectorCategory::Communication, false),
            connector("stripe", "Stripe", "Payments and subscription billing", ConnectorCategory::Payment, true),
        ])
        .unwrap()
    }

    fn ids(connectors: Vec<&ConnectorDescriptor>) -> Vec<&str> {
        connectors.into_iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ConnectorCatalog::new(vec![
            connector("hubspot", "HubSpot", "", ConnectorCategory::Crm, true),
            connector("hubspot", "HubSpot EU", "", ConnectorCategory::Crm, false),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { id }) if id == "hubspot"));
    }

    #[test]
    fn test_empty_query_is_identity() {
        let catalog = sample_catalog();
        let all = catalog.filter(&CatalogQuery::default());
        assert_eq!(all.len(), catalog.len());
        assert!(all.iter().zip(catalog.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_search_matches_name_or_description_case_insensitively() {
        let catalog = sample_catalog();

        let by_name = catalog.filter(&CatalogQuery::new("PIPE", CategoryFilter::All, false));
        assert_eq!(ids(by_name), vec!["pipedrive"]);

        // "crm" appears only in descriptions
        let by_description = catalog.filter(&CatalogQuery::new("crm", CategoryFilter::All, false));
        assert_eq!(ids(by_description), vec!["hubspot", "pipedrive"]);
    }

    #[test]
    fn test_search_term_is_matched_verbatim() {
        let catalog = sample_catalog();

        let padded = catalog.filter(&CatalogQuery::new("hub ", CategoryFilter::All, false));
        assert!(padded.is_empty());

        let blank = catalog.filter(&CatalogQuery::new("   ", CategoryFilter::All, false));
        assert!(blank.is_empty());

        // Inner spaces are part of the substring
        let phrase = catalog.filter(&CatalogQuery::new("sales crm", CategoryFilter::All, false));
        assert_eq!(ids(phrase), vec!["hubspot", "pipedrive"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let catalog = sample_catalog();
        let query = CatalogQuery::new("sales", ConnectorCategory::Crm.into(), true);
        assert_eq!(ids(catalog.filter(&query)), vec!["hubspot"]);

        let query = CatalogQuery::new("", ConnectorCategory::Crm.into(), false);
        assert_eq!(ids(catalog.filter(&query)), vec!["hubspot", "pipedrive"]);

        let query = CatalogQuery::new("", CategoryFilter::All, true);
        assert_eq!(ids(catalog.filter(&query)), vec!["hubspot", "mailchimp", "stripe"]);
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        let catalog = sample_catalog();
        let query = CatalogQuery::new("netsuite", CategoryFilter::All, false);
        assert!(catalog.filter(&query).is_empty());

        let query = CatalogQuery::new("", ConnectorCategory::Storage.into(), false);
        assert!(catalog.filter(&query).is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.categories(),
            vec![
                ConnectorCategory::Crm,
                ConnectorCategory::Marketing,
                ConnectorCategory::Communication,
                ConnectorCategory::Payment,
            ]
        );
    }

    #[test]
    fn test_count_by_category() {
        let catalog = sample_catalog();
        let counts = catalog.count_by_category();
        assert_eq!(counts[0], (ConnectorCategory::Crm, 2));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), catalog.len());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("slack").map(|c| c.name.as_str()), Some("Slack"));
        assert!(catalog.get("salesforce").is_none());
    }
}
