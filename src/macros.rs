//! Convenience macros for working with hardware addresses.
//!
//! This module provides declarative macros that simplify common
//! Wake-on-LAN operations and make code more readable and concise.

/// Creates a [`MacAddress`](crate::addressing::MacAddress) from its
/// textual notation.
///
/// The `mac!` macro provides a clean syntax for hardware address
/// literals, validated at compile time.
///
/// # Syntax
///
/// ```text
/// mac!("AA:BB:CC:DD:EE:FF")
/// mac!("aa-bb-cc-dd-ee-ff")
/// ```
///
/// # Examples
///
/// ```
/// use wol_pico::mac;
///
/// let desktop = mac!("00:11:22:33:44:55");
/// let nas = mac!("A4-BB-6D-01-02-03");
///
/// assert_eq!(desktop.octets(), [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
/// ```
///
/// # Compile-Time Validation
///
/// The macro validates the literal at compile time:
///
/// ```compile_fail
/// // This will fail to compile: not a hardware address
/// let addr = wol_pico::mac!("hello");
/// ```
///
/// ```compile_fail
/// // This will fail to compile: invalid hex digit
/// let addr = wol_pico::mac!("00:11:22:33:44:GG");
/// ```
///
/// # Equivalent Code
///
/// ```
/// use wol_pico::addressing::MacAddress;
/// use wol_pico::mac;
///
/// // Using macro
/// let addr1 = mac!("00:11:22:33:44:55");
///
/// // Without macro (equivalent, but checked at runtime)
/// let addr2: MacAddress = "00:11:22:33:44:55".parse().unwrap();
///
/// assert_eq!(addr1, addr2);
/// ```
#[macro_export]
macro_rules! mac {
    ($s:literal) => {{
        // Compile-time validation: parse_const panics in const context
        // on malformed input
        const ADDR: $crate::addressing::MacAddress =
            $crate::addressing::MacAddress::parse_const($s);
        ADDR
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_mac_macro() {
        let addr = mac!("00:1A:2B:3C:4D:5E");
        assert_eq!(addr.octets(), [0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);
    }

    #[test]
    fn test_mac_macro_dash_form() {
        let addr = mac!("ff-ff-ff-ff-ff-ff");
        assert!(addr.is_broadcast());
    }
}
