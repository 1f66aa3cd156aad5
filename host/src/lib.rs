mod device;
mod keys;
mod mask_arg;
mod terminal;

use std::io::IsTerminal as _;

pub use anyhow::Result as AnyResult;
pub use device::{Device, DeviceError};
pub use keys::{Action, action_for_key};
pub use mask_arg::{MaskParseError, parse_led_mask};
use shared::StatusPacket;
pub use terminal::RawModeGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// One status line, shared between the tools and kept apart from the
/// carriage-return redraw the interactive tool does around it.
#[must_use]
pub fn status_line(status: &StatusPacket) -> String {
    format!(
        "Current temperature: {}\u{b0}C - LEDs: {}",
        status.temperature_c(),
        status.leds()
    )
}

/// Logs go to stderr so they do not tear the in-place status line on
/// stdout. Filtering comes from `RUST_LOG`, off by default.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(EnvFilter::from_default_env())
        .init();
}

#[cfg(test)]
mod tests {
    use shared::StatusPacket;

    use super::status_line;

    /// The displayed sequence for a short run of polled packets.
    #[test]
    fn test_status_line_sequence() {
        let packets = [[20, 0x00], [20, 0x10], [21, 0x10]];

        let lines = packets
            .iter()
            .map(|raw| StatusPacket::try_from(raw.as_slice()).unwrap())
            .map(|status| status_line(&status))
            .collect::<Vec<_>>();

        assert_eq!(
            lines,
            [
                "Current temperature: 20\u{b0}C - LEDs: ....",
                "Current temperature: 20\u{b0}C - LEDs: o...",
                "Current temperature: 21\u{b0}C - LEDs: o...",
            ]
        );
    }

    #[test]
    fn test_status_line_negative_temperature() {
        let status = StatusPacket::try_from([0xF6, 0xA0].as_slice()).unwrap();
        assert_eq!(status_line(&status), "Current temperature: -10\u{b0}C - LEDs: .oo.");
    }
}
