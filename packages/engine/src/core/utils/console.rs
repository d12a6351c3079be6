//! Console logging macros
//!
//! On wasm32 the messages go to the browser devtools console through
//! `web_sys::console`. Native builds (tests, tools) write to stderr instead,
//! because wasm-bindgen imports cannot be called off-wasm.
//!
//! Usage:
//! ```rust
//! use animata_engine::console_warn;
//!
//! let id = 7;
//! console_warn!("actor {} has no draw capability", id);
//! ```

#[doc(hidden)]
pub fn write_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[animata] {}", msg);
    }
}

#[doc(hidden)]
pub fn write_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[animata] warning: {}", msg);
    }
}

#[doc(hidden)]
pub fn write_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[animata] error: {}", msg);
    }
}

/// Informational message (`console.log`)
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        $crate::core::utils::console::write_log(&format!($($arg)*));
    }};
}

/// Recoverable problem (`console.warn`): bad config, ignored request
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        $crate::core::utils::console::write_warn(&format!($($arg)*));
    }};
}

/// Something the host should look at (`console.error`)
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {{
        $crate::core::utils::console::write_error(&format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_format_args() {
        let id = 3;
        console_log!("actor {} added", id);
        console_warn!("actor {} degenerate", id);
        console_error!("stage {}", "missing surface");
    }
}
