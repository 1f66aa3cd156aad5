use std::{io, os::fd::AsFd as _};

use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

/// Puts stdin into cbreak mode for the lifetime of the guard and
/// restores the saved settings on drop, so every exit path (normal,
/// error, quit key) leaves the terminal usable.
///
/// `ISIG` is cleared along with `ICANON`/`ECHO`, so Ctrl-C reaches the
/// application as the byte `0x03` instead of a signal and goes through
/// the same teardown as the quit key. Output processing is untouched.
#[derive(Debug)]
pub struct RawModeGuard {
    saved: Termios,
}

impl RawModeGuard {
    /// # Errors
    ///
    /// Fails when stdin is not a terminal or the settings cannot be
    /// applied.
    pub fn new() -> nix::Result<Self> {
        let stdin = io::stdin();
        let saved = termios::tcgetattr(stdin.as_fd())?;

        let mut raw = saved.clone();
        raw.local_flags
            .remove(LocalFlags::ICANON | LocalFlags::ECHO | LocalFlags::ISIG);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

        termios::tcsetattr(stdin.as_fd(), SetArg::TCSADRAIN, &raw)?;

        Ok(Self { saved })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        termios::tcsetattr(io::stdin().as_fd(), SetArg::TCSADRAIN, &self.saved).ok();
        println!();
    }
}
