use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    pub value: String,
    pub placeholder: String,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        input {
            class: "input-field search-input",
            r#type: "search",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ToggleInputProps {
    pub label: String,
    pub checked: bool,
    pub on_change: EventHandler<bool>,
}

#[component]
pub fn ToggleInput(props: ToggleInputProps) -> Element {
    rsx! {
        label {
            class: "toggle-input",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |event| props.on_change.call(event.checked())
            }
            span { "{props.label}" }
        }
    }
}
