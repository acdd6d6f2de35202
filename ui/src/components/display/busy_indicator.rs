use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::state::BusyState;

#[derive(Props, PartialEq, Clone)]
pub struct BusyIndicatorProps {
    pub state: BusyState,
    /// Shown when the busy slot carries no message
    pub default_message: String,
}

/// Global "processing" overlay, visible while any busy slot is open
#[component]
pub fn BusyIndicator(props: BusyIndicatorProps) -> Element {
    if !props.state.is_busy() {
        return rsx! {};
    }

    let message = props
        .state
        .message()
        .map(str::to_string)
        .unwrap_or(props.default_message);

    rsx! {
        div {
            class: "busy-overlay",
            LoadingIndicator { message: message }
        }
    }
}
