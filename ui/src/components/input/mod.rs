pub mod search_input;

pub use search_input::*;
