//! Console process spawning.
//!
//! The consumer launches the console executable itself, passing the
//! channel's session handle as the sole command-line argument. The
//! platform-specific executable suffix is resolved here, and a console
//! binary sitting next to the current executable is preferred over a
//! `PATH` lookup.

use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use wirebot_foundation::{Error, Result};

/// Base name of the console executable.
pub const CONSOLE_BIN: &str = "wirebot-console";

/// Returns the console executable name with the platform suffix applied.
#[must_use]
pub fn console_executable() -> String {
    format!("{CONSOLE_BIN}{}", std::env::consts::EXE_SUFFIX)
}

/// Locates the console executable.
///
/// Prefers a sibling of the current executable (the usual layout for a
/// packaged game); falls back to the bare name for a `PATH` lookup.
#[must_use]
pub fn locate_console() -> PathBuf {
    let name = console_executable();
    if let Ok(current) = std::env::current_exe()
        && let Some(dir) = current.parent()
    {
        let candidate = dir.join(&name);
        if candidate.is_file() {
            return candidate;
        }
    }
    PathBuf::from(name)
}

/// Spawns the located console process with the given session handle.
///
/// # Errors
///
/// Returns `Spawn` if the process cannot be started.
pub fn spawn_console(handle: &str) -> Result<Child> {
    spawn_console_at(&locate_console(), handle)
}

/// Spawns a specific console executable with the given session handle.
///
/// # Errors
///
/// Returns `Spawn` if the process cannot be started.
pub fn spawn_console_at(program: &Path, handle: &str) -> Result<Child> {
    log::info!(
        "spawning console {} with session handle {handle}",
        program.display()
    );
    Command::new(program).arg(handle).spawn().map_err(Error::spawn)
}
