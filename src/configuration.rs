//! Device configuration template.
//!
//! Edit the values below with your actual WiFi details and default wake
//! target before building and flashing the firmware. The WiFi entries can
//! also be overridden at build time via the `WIFI_SSID` and
//! `WIFI_PASSWORD` environment variables.
//!
//! The credentials are baked into the firmware image as plain-text
//! constants and live for the life of the flashed binary.
//!
//! Example:
//!
//! ```text
//! WIFI_NETWORK=MyHomeWiFi
//! WIFI_PASSWORD=MySecurePassword123
//! TARGET_MAC=00:11:22:33:44:55
//! WAKE_PORT=4950
//! ```

pub const CONFIG: &str = r#"
WIFI_NETWORK=your_wifi_ssid_here
WIFI_PASSWORD=your_wifi_password_here
TARGET_MAC=AA:BB:CC:DD:EE:FF
WAKE_PORT=4950
"#;
