use thiserror::Error as ThisError;

use crate::{LedMask, STATUS_PACKET_LEN};

/// Status packet the device produces on every bulk IN read: a signed
/// temperature in degrees Celsius followed by the LED bitmask. There is
/// no sequencing or acknowledgment around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusPacket {
    temperature_c: i8,
    leds: LedMask,
}

impl StatusPacket {
    #[inline]
    #[must_use]
    pub const fn temperature_c(&self) -> i8 {
        self.temperature_c
    }

    #[inline]
    #[must_use]
    pub const fn leds(&self) -> LedMask {
        self.leds
    }
}

/// Transfers come back padded up to the endpoint size; only the first
/// two bytes carry meaning.
impl TryFrom<&[u8]> for StatusPacket {
    type Error = StatusConvError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        let &[temperature, leds, ..] = buf else {
            return Err(StatusConvError { len: buf.len() });
        };

        Ok(Self {
            temperature_c: i8::from_le_bytes([temperature]),
            leds: LedMask::new(leds),
        })
    }
}

#[derive(Clone, Copy, Debug, ThisError)]
#[cfg_attr(test, derive(PartialEq))]
#[error("status packet too short: got {len} of {STATUS_PACKET_LEN} bytes")]
pub struct StatusConvError {
    len: usize,
}

#[cfg(test)]
mod tests {
    use super::{LedMask, StatusPacket};

    #[test]
    fn test_status_decoding() {
        let status = StatusPacket::try_from([0xF6, 0xA0].as_slice()).unwrap();

        assert_eq!(status.temperature_c(), -10);
        assert_eq!(status.leds(), LedMask::new(0xA0));
    }

    #[test]
    fn test_status_ignores_padding() {
        let mut buf = [0_u8; 64];
        buf[0] = 20;
        buf[1] = 0x10;

        let status = StatusPacket::try_from(buf.as_slice()).unwrap();

        assert_eq!(status.temperature_c(), 20);
        assert_eq!(status.leds(), LedMask::new(0x10));
    }

    #[test]
    fn test_runt_packet_rejected() {
        assert!(StatusPacket::try_from([].as_slice()).is_err());
        assert!(StatusPacket::try_from([0xF6].as_slice()).is_err());
    }
}
