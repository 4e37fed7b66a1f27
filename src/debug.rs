//! Console logging for rcp-attach

use std::sync::atomic::{AtomicBool, Ordering};

/// Set once from the `--debug` flag
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Only printed with `--debug`
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("🔍 Debug: {}", format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! info_println {
    ($($arg:tt)*) => {
        println!("{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! success_println {
    ($($arg:tt)*) => {
        println!("✅ {}", format_args!($($arg)*))
    };
}

/// Non-fatal problems; execution continues
#[macro_export]
macro_rules! warn_println {
    ($($arg:tt)*) => {
        eprintln!("⚠️  {}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_println {
    ($($arg:tt)*) => {
        eprintln!("❌ {}", format_args!($($arg)*))
    };
}
