/// Browser console logging with a millisecond timestamp prefix.
///
/// These wrap `gloo_console` and always hand it a single pre-formatted string,
/// which keeps numeric arguments from being passed to the console as BigInt.
/// Only call them from code that runs in the browser; state primitives log
/// through `tracing` instead so they stay testable on native targets.
pub fn stamp(message: &str) -> String {
    format!("[{}] {}", crate::utils::clock::now_ms(), message)
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        gloo_console::info!($crate::utils::console_macros::stamp(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        gloo_console::warn!($crate::utils::console_macros::stamp(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        gloo_console::error!($crate::utils::console_macros::stamp(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        gloo_console::debug!($crate::utils::console_macros::stamp(&format!($($arg)*)))
    };
}
