//! Cross-cutting helpers shared by the state primitives and the browser layer:
//!
//! - **clock**: Unix-millisecond timestamps on both wasm32 and native targets
//! - **console_macros**: timestamped browser console logging for components
//!
//! Core state code logs through `tracing`; the console macros are only used in
//! code that runs inside the browser.

pub mod clock;
pub mod console_macros;

pub use clock::now_ms;
