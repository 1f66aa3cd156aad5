use thiserror::Error as ThisError;

/// The four LEDs on the board, in front-panel order.
///
/// The firmware drives the LEDs from non-contiguous port bits and the
/// last two are swapped relative to an ascending mapping. That wiring
/// is a fixed hardware convention, so [`Led::mask`] mirrors it exactly.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Led {
    Led1,
    Led2,
    Led3,
    Led4,
}

impl Led {
    /// Front-panel iteration order.
    pub const ALL: [Self; 4] = [Self::Led1, Self::Led2, Self::Led3, Self::Led4];

    /// Wire bit of this LED in the status/command bitmask.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self {
            Self::Led1 => 1 << 4,
            Self::Led2 => 1 << 5,
            Self::Led3 => 1 << 7,
            Self::Led4 => 1 << 6,
        }
    }
}

impl From<Led> for u8 {
    fn from(value: Led) -> Self {
        value as Self
    }
}

impl TryFrom<u8> for Led {
    type Error = LedConvError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Led::Led1),
            1 => Ok(Led::Led2),
            2 => Ok(Led::Led3),
            3 => Ok(Led::Led4),
            _ => Err(LedConvError),
        }
    }
}

#[derive(Clone, Copy, Debug, ThisError)]
#[cfg_attr(test, derive(PartialEq))]
#[error("integer to LED conversion failed")]
pub struct LedConvError;
