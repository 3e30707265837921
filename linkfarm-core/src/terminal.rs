//! Terminal plumbing around the bridge.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::os::unix::io::AsRawFd;

use nix::unistd;

const CONTROLLING_TTY: &str = "/dev/tty";

/// True when standard input is not a terminal, i.e. something was piped in.
pub fn stdin_is_piped() -> bool {
    !io::stdin().is_terminal()
}

/// Point fd 0 back at the controlling terminal once the pipe is drained,
/// so whatever runs next can read the keyboard.
pub fn reattach_stdin() -> io::Result<()> {
    let tty = OpenOptions::new()
        .read(true)
        .write(true)
        .open(CONTROLLING_TTY)?;

    // fd 0 gets its own copy; `tty` is closed on drop.
    unistd::dup2(tty.as_raw_fd(), io::stdin().as_raw_fd()).map_err(io::Error::from)?;
    tracing::debug!(tty = CONTROLLING_TTY, "stdin reattached");
    Ok(())
}
