//! Unified logging macros.
//!
//! This module provides a unified logging interface that automatically
//! selects between `log::` (USB logger) and `defmt::` based on the
//! active feature flags.
//!
//! # Usage
//!
//! ```ignore
//! use wol_pico::wol_log;
//!
//! wol_log!(info, "WiFi connected");
//! wol_log!(debug, "Received {} bytes", n);
//! wol_log!(warn, "Join timeout, retrying");
//! wol_log!(error, "Failed to send magic packet");
//! ```
//!
//! # Feature Flags
//!
//! - `usb-logger` - Uses `log::` crate (for USB serial debugging)
//! - No feature - Uses `defmt::` (default, more efficient for embedded)

/// Unified logging macro - automatically selects log:: or defmt:: based
/// on features.
///
/// This macro provides a consistent logging API across the firmware,
/// regardless of which logging backend is configured at compile time.
#[macro_export]
#[cfg(feature = "usb-logger")]
macro_rules! wol_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(feature = "usb-logger"))]
macro_rules! wol_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}
