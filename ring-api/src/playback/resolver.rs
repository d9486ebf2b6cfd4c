//! Player command resolution
//!
//! Maps an audio path and host platform to the external player invocation.
//! The only side effect is a point-in-time existence check on the path; a
//! file removed after this check fails later inside the playback task.

use crate::error::{PlaybackError, Result};
use std::fmt;
use std::process::Stdio;

/// Host operating system family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    /// Any OS without a known player
    Other(String),
}

impl Platform {
    /// Platform of the running host
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Parse an OS name as reported by `std::env::consts::OS`
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External player invocation for one playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackCommand {
    program: String,
    args: Vec<String>,
}

impl PlaybackCommand {
    pub(crate) fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Build the process; stdin is detached so the player never waits on it
    pub fn to_command(&self) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.program);
        command.args(&self.args).stdin(Stdio::null());
        command
    }
}

impl fmt::Display for PlaybackCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Resolve the player command for `path` on `platform`
///
/// Path validation runs first, so an invalid path is reported as
/// `InvalidAudioPath` on every platform.
pub fn resolve(path: &str, platform: &Platform) -> Result<PlaybackCommand> {
    if path.is_empty() {
        return Err(PlaybackError::InvalidAudioPath);
    }

    // Only a definite "not found" rejects the path; other stat failures are
    // left for the player to report.
    if let Err(e) = std::fs::metadata(path) {
        if e.kind() == std::io::ErrorKind::NotFound {
            return Err(PlaybackError::InvalidAudioPath);
        }
    }

    match platform {
        Platform::Linux => Ok(PlaybackCommand::new("aplay", &["-q", path])),
        Platform::Windows => Ok(PlaybackCommand::new(
            "ffplay",
            &["-nodisp", "-autoexit", path],
        )),
        Platform::Other(name) => Err(PlaybackError::UnsupportedPlatform(name.clone())),
    }
}
