//! File-manager launcher
//!
//! Spawns the platform's "reveal in file manager" command for a directory.
//! The launch is fire-and-forget: the child is never awaited and its output
//! is never read, so errors are limited to the spawn step itself.

use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::LaunchError;

/// Seam for the one process side effect in the gateway. The server holds a
/// `dyn FolderOpener` so tests can substitute a recording fake.
pub trait FolderOpener: Send + Sync {
    /// Starts the platform file-manager command for `path` and detaches.
    fn open_folder(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Production opener backed by the host OS's reveal command.
pub struct SystemOpener;

#[cfg(target_os = "windows")]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("explorer");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

impl FolderOpener for SystemOpener {
    fn open_folder(&self, path: &Path) -> Result<(), LaunchError> {
        let mut cmd = reveal_command(path);
        let program = cmd.get_program().to_string_lossy().into_owned();

        // Spawn only; dropping the Child leaves the program running.
        match cmd.spawn() {
            Ok(_child) => {
                info!("Opened {} with {}", path.display(), program);
                Ok(())
            }
            Err(e) => Err(LaunchError::Spawn(program, e)),
        }
    }
}
