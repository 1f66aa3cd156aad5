use std::time::Duration;

use rusb::{Context, DeviceHandle, UsbContext as _, constants::LIBUSB_ENDPOINT_IN};
use shared::{
    BULK_IN_EP, BULK_OUT_EP, Led, LedMask, MAX_PACKET_LEN, StatusConvError, StatusPacket, USB_PID,
    USB_VID,
};
use thiserror::Error as ThisError;

/// Zero means no timeout in libusb. Freshness is host-polled on a
/// coarse cadence, so a read simply blocks until the device answers.
const NO_TIMEOUT: Duration = Duration::ZERO;

#[derive(Debug, ThisError)]
pub enum DeviceError {
    #[error("no matching vendor device found ({USB_VID:04x}:{USB_PID:04x})")]
    NotFound,
    #[error("malformed status packet")]
    Status(#[from] StatusConvError),
    #[error("usb transfer failed")]
    Io(#[from] rusb::Error),
}

/// A session with the one attached vendor device: raw packet exchange
/// on the fixed bulk endpoint pair, plus the host-side mirror of the
/// LED bitmask.
#[derive(Debug)]
pub struct Device {
    handle: DeviceHandle<Context>,
    manufacturer: String,
    product: String,
    leds: LedMask,
}

impl Device {
    /// Enumerates attached devices and opens the first one matching the
    /// vendor/product pair.
    ///
    /// # Errors
    ///
    /// [`DeviceError::NotFound`] when nothing matches; unrecoverable,
    /// callers are expected to exit with a diagnostic rather than
    /// retry. [`DeviceError::Io`] on enumeration or setup failure.
    pub fn open() -> Result<Self, DeviceError> {
        let device = Context::new()?
            .devices()?
            .iter()
            .find(|device| {
                device
                    .device_descriptor()
                    .is_ok_and(|desc| desc.vendor_id() == USB_VID && desc.product_id() == USB_PID)
            })
            .ok_or(DeviceError::NotFound)?;

        let desc = device.device_descriptor()?;
        let handle = device.open()?;

        let manufacturer = handle.read_manufacturer_string_ascii(&desc)?;
        let product = handle.read_product_string_ascii(&desc)?;

        handle.set_auto_detach_kernel_driver(true)?;
        handle.set_active_configuration(1)?;
        handle.claim_interface(0)?;

        tracing::info!(vid = USB_VID, pid = USB_PID, product = %product, "opened device");

        Ok(Self {
            handle,
            manufacturer,
            product,
            leds: LedMask::default(),
        })
    }

    #[inline]
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    #[inline]
    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Last LED bitmask seen or written. Writes are fire-and-forget, so
    /// this can lag hardware until the next status read.
    #[inline]
    #[must_use]
    pub fn leds(&self) -> LedMask {
        self.leds
    }

    /// Blocking status read from the bulk IN endpoint.
    ///
    /// # Errors
    ///
    /// [`DeviceError::Io`] on transfer failure, [`DeviceError::Status`]
    /// on a runt packet. Both are fatal to the session.
    pub fn read_status(&mut self) -> Result<StatusPacket, DeviceError> {
        let mut buf = [0; MAX_PACKET_LEN];

        let len = self
            .handle
            .read_bulk(LIBUSB_ENDPOINT_IN | BULK_IN_EP, &mut buf, NO_TIMEOUT)?;

        let status = StatusPacket::try_from(&buf[..len])?;
        self.leds = status.leds();

        tracing::debug!(temperature = status.temperature_c(), leds = %status.leds(), "status");

        Ok(status)
    }

    /// Overwrites the device LED bitmask. The whole write-side protocol
    /// is this single byte; there is no acknowledgment.
    ///
    /// # Errors
    ///
    /// [`DeviceError::Io`] on transfer failure.
    pub fn write_leds(&mut self, mask: LedMask) -> Result<(), DeviceError> {
        self.handle
            .write_bulk(BULK_OUT_EP, &[mask.raw()], NO_TIMEOUT)?;
        self.leds = mask;

        tracing::debug!(leds = %mask, "wrote LED mask");

        Ok(())
    }

    /// Read-modify-write against the mirrored mask, not the device's
    /// true state.
    ///
    /// # Errors
    ///
    /// [`DeviceError::Io`] on transfer failure.
    pub fn toggle_led(&mut self, led: Led) -> Result<(), DeviceError> {
        let mut mask = self.leds;
        mask.toggle(led);
        self.write_leds(mask)
    }
}
