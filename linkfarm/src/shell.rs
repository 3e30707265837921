use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Exported to the shell so prompts and scripts can tell they are in a farm.
pub const FARM_ENV: &str = "LINKFARM_DIR";

pub fn default_shell() -> PathBuf {
    std::env::var_os("SHELL")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/bin/sh"))
}

pub fn shell_command(dir: &Path) -> Command {
    let mut cmd = Command::new(default_shell());
    cmd.current_dir(dir).env(FARM_ENV, dir);
    cmd
}

/// Run an interactive shell inside `dir` and wait for it to exit.
pub fn run_shell(dir: &Path) -> Result<ExitStatus> {
    shell_command(dir)
        .status()
        .with_context(|| format!("Failed to spawn {}", default_shell().display()))
}
