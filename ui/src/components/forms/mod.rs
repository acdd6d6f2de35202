pub mod category_selector;
pub mod connector_browser;

pub use category_selector::*;
pub use connector_browser::*;
