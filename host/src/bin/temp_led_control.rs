use std::{
    io::{self, Read as _, Write as _},
    os::fd::AsFd as _,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use host::{Action, AnyResult, Device, RawModeGuard, action_for_key, status_line};
use nix::poll::{PollFd, PollFlags, PollTimeout, poll};
use shared::{USB_PID, USB_VID};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> AnyResult<()> {
    host::init_tracing();

    // Opened before any terminal change so a missing device exits with
    // a plain diagnostic and an untouched terminal.
    let mut device = Device::open().context("opening vendor device")?;

    println!(
        "Connected to device 0x{USB_VID:04X}/0x{USB_PID:04X} - {} [{}]",
        device.product(),
        device.manufacturer()
    );

    let _raw_mode = RawModeGuard::new().context("entering cbreak mode")?;
    println!("Press q to exit, 1-4 to toggle LEDs\n");

    run(&mut device)
}

/// Single-threaded cooperative loop multiplexing keyboard input with
/// the periodic status poll. The next poll is scheduled relative to the
/// completion of the previous read, so the cadence drifts by the read
/// duration; at this interval that is acceptable.
fn run(device: &mut Device) -> AnyResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut next_poll = Instant::now();

    loop {
        let timeout = next_poll.saturating_duration_since(Instant::now());
        let mut fds = [PollFd::new(stdin.as_fd(), PollFlags::POLLIN)];

        poll(
            &mut fds,
            PollTimeout::try_from(timeout).unwrap_or(PollTimeout::MAX),
        )
        .context("polling stdin")?;

        if fds[0].revents().is_some_and(|revents| !revents.is_empty()) {
            let mut key = [0; 1];

            if stdin.lock().read(&mut key)? == 0 {
                return Ok(());
            }

            match action_for_key(key[0]) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Toggle(led)) => device.toggle_led(led)?,
                None => {}
            }
        }

        if Instant::now() >= next_poll {
            let status = device.read_status()?;

            write!(stdout, "\r{}", status_line(&status))?;
            stdout.flush()?;

            next_poll = Instant::now() + POLL_INTERVAL;
        }
    }
}
