mod unified_config;

pub use unified_config::*;
