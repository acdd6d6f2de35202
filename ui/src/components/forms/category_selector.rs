use dioxus::prelude::*;

use crate::catalog::{CategoryFilter, ConnectorCategory};
use crate::console_warn;

#[derive(Props, PartialEq, Clone)]
pub struct CategorySelectorProps {
    /// Categories present in the catalog, in display order
    pub categories: Vec<ConnectorCategory>,
    pub selected: CategoryFilter,
    pub on_change: EventHandler<CategoryFilter>,
}

#[component]
pub fn CategorySelector(props: CategorySelectorProps) -> Element {
    let categories = props.categories;
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            class: "category-selector",
            value: "{selected.as_str()}",
            onchange: move |evt| {
                match evt.value().parse::<CategoryFilter>() {
                    Ok(filter) => on_change.call(filter),
                    Err(e) => console_warn!("[Catalog] Ignoring category selection: {}", e),
                }
            },
            option {
                value: "all",
                selected: selected == CategoryFilter::All,
                "All categories"
            }
            for category in categories {
                option {
                    value: "{category.as_str()}",
                    selected: selected == CategoryFilter::Only(category),
                    "{category.label()}"
                }
            }
        }
    }
}
