pub mod busy_indicator;
pub mod health_panel;
pub mod loading_indicator;
pub mod run_status_footer;

pub use busy_indicator::*;
pub use health_panel::*;
pub use loading_indicator::*;
pub use run_status_footer::*;
