use std::rc::Rc;

use dioxus::prelude::*;

use crate::catalog::{CatalogQuery, CategoryFilter, ConnectorCatalog};
use crate::components::forms::CategorySelector;
use crate::components::input::{SearchInput, ToggleInput};

#[derive(Props, PartialEq, Clone)]
pub struct ConnectorBrowserProps {
    pub catalog: Rc<ConnectorCatalog>,
    /// Called with the connector id when a card is chosen
    pub on_select: EventHandler<String>,
}

/// Search and browse view over the connector catalog
#[component]
pub fn ConnectorBrowser(props: ConnectorBrowserProps) -> Element {
    let mut query = use_signal(CatalogQuery::default);
    let catalog = props.catalog.clone();
    let on_select = props.on_select;

    let current = query();
    let results = catalog.filter(&current);
    let result_count = results.len();
    let total = catalog.len();

    rsx! {
        div {
            class: "connector-browser",

            div {
                class: "connector-filters",
                SearchInput {
                    value: current.search.clone(),
                    placeholder: "Search connectors...".to_string(),
                    on_change: move |search: String| query.with_mut(|q| q.search = search),
                }
                CategorySelector {
                    categories: catalog.categories(),
                    selected: current.category,
                    on_change: move |category: CategoryFilter| query.with_mut(|q| q.category = category),
                }
                ToggleInput {
                    label: "Popular only".to_string(),
                    checked: current.popular_only,
                    on_change: move |popular_only: bool| query.with_mut(|q| q.popular_only = popular_only),
                }
            }

            div {
                class: "connector-result-count",
                "Showing {result_count} of {total} connectors"
            }

            if results.is_empty() {
                div {
                    class: "connector-empty",
                    "No connectors match your filters"
                }
            }

            div {
                class: "connector-grid",
                for connector in results {
                    button {
                        key: "{connector.id}",
                        class: "connector-card",
                        onclick: {
                            let id = connector.id.clone();
                            move |_| on_select.call(id.clone())
                        },
                        div {
                            class: "connector-card-header",
                            span { class: "connector-name", "{connector.name}" }
                            if connector.popular {
                                span { class: "connector-badge popular", "Popular" }
                            }
                        }
                        p { class: "connector-description", "{connector.description}" }
                        div {
                            class: "connector-meta",
                            span { class: "connector-category", "{connector.category.label()}" }
                            span { class: "connector-complexity", "{connector.setup_complexity.label()}" }
                        }
                        ul {
                            class: "connector-features",
                            for feature in connector.features.iter() {
                                li { key: "{feature.name}", "{feature.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
