//! Console logging
//!
//! On wasm32 messages go to the browser console through web-sys.
//! Native builds (tests, benches) compile the call away but still
//! type-check the format arguments.

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn console_log(_message: &str) {}

/// `format!`-style logging to the browser console
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::log::console_log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
