use core::fmt;

use crate::Led;

/// The LED bitmask as it travels on the wire, one bit per LED.
///
/// This is also the host's mirror of the device state: the write side
/// of the protocol is a plain bitmask overwrite with no acknowledgment,
/// so the mirror can diverge from hardware until the next status read
/// refreshes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedMask(u8);

impl LedMask {
    #[inline]
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_lit(self, led: Led) -> bool {
        self.0 & led.mask() != 0
    }

    #[inline]
    pub const fn toggle(&mut self, led: Led) {
        self.0 ^= led.mask();
    }
}

impl From<u8> for LedMask {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<LedMask> for u8 {
    fn from(value: LedMask) -> Self {
        value.0
    }
}

/// Renders one character per LED in front-panel order, `'o'` lit and
/// `'.'` dark.
impl fmt::Display for LedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for led in Led::ALL {
            f.write_str(if self.is_lit(led) { "o" } else { "." })?;
        }

        Ok(())
    }
}
