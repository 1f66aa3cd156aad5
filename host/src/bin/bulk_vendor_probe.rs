use std::{thread, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use host::{AnyResult, Device, parse_led_mask, status_line};
use shared::{USB_PID, USB_VID};

const READ_INTERVAL: Duration = Duration::from_secs(1);

/// Write-then-read probe for the bulk vendor device: optionally
/// overwrites the LED mask once, then prints the status packet every
/// second until interrupted.
#[derive(Debug, Parser)]
struct Args {
    /// LED mask to write at startup, decimal or 0x-prefixed hex.
    mask: Option<String>,
}

fn main() -> AnyResult<()> {
    host::init_tracing();

    let args = Args::parse();

    // Validated before the device is opened; a bad mask performs no
    // USB traffic at all.
    let mask = args.mask.as_deref().map(parse_led_mask).transpose()?;

    let mut device = Device::open().context("opening vendor device")?;

    println!(
        "Connected to device 0x{USB_VID:04X}/0x{USB_PID:04X} - {} [{}]",
        device.product(),
        device.manufacturer()
    );

    if let Some(mask) = mask {
        device.write_leds(mask)?;
    }

    loop {
        let status = device.read_status()?;
        println!("{}", status_line(&status));
        thread::sleep(READ_INTERVAL);
    }
}
