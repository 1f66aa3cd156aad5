#![no_std]

mod led;
mod led_mask;
mod status;

pub use led::{Led, LedConvError};
pub use led_mask::LedMask;
pub use status::{StatusConvError, StatusPacket};

pub const USB_VID: u16 = 0x03EB;
pub const USB_PID: u16 = 0x206C;

/// Bulk endpoint numbers, fixed by the firmware. These are plain
/// endpoint numbers; the host applies the direction bit itself.
pub const BULK_IN_EP: u8 = 3;
pub const BULK_OUT_EP: u8 = 4;

/// The device pads bulk IN transfers up to the endpoint size.
pub const MAX_PACKET_LEN: usize = 64;
pub const STATUS_PACKET_LEN: usize = 2;
