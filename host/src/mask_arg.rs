use shared::LedMask;
use thiserror::Error as ThisError;

/// Parses the LED mask argument of the probe tool: decimal or
/// `0x`-prefixed hexadecimal, within a byte.
///
/// # Errors
///
/// Anything outside `0..=255` or non-numeric is rejected; the caller
/// reports it and exits before touching the device.
pub fn parse_led_mask(arg: &str) -> Result<LedMask, MaskParseError> {
    let parsed = match arg.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => arg.parse(),
    };

    parsed
        .map(LedMask::new)
        .map_err(|_| MaskParseError { arg: arg.into() })
}

#[derive(Debug, ThisError)]
#[cfg_attr(test, derive(PartialEq))]
#[error("LED mask must be an integer in 0..=255, got {arg:?}")]
pub struct MaskParseError {
    arg: String,
}

#[cfg(test)]
mod tests {
    use super::parse_led_mask;

    #[test]
    fn test_decimal_mask() {
        assert_eq!(parse_led_mask("10").unwrap().raw(), 10);
        assert_eq!(parse_led_mask("0").unwrap().raw(), 0);
        assert_eq!(parse_led_mask("255").unwrap().raw(), 255);
    }

    #[test]
    fn test_hex_mask() {
        assert_eq!(parse_led_mask("0x1F").unwrap().raw(), 31);
        assert_eq!(parse_led_mask("0xf0").unwrap().raw(), 0xF0);
    }

    #[test]
    fn test_out_of_range_mask_rejected() {
        assert!(parse_led_mask("256").is_err());
        assert!(parse_led_mask("-1").is_err());
        assert!(parse_led_mask("0x100").is_err());
    }

    #[test]
    fn test_junk_mask_rejected() {
        assert!(parse_led_mask("").is_err());
        assert!(parse_led_mask("0x").is_err());
        assert!(parse_led_mask("leds").is_err());
    }
}
