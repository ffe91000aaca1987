//! [`WindowManager`] implementation backed by i3 (or sway) IPC.
//!
//! Talks to the window manager directly over its Unix socket, avoiding any
//! `i3-msg`/`swaymsg` child process.  The socket is taken from the
//! configuration, or from `$I3SOCK` / `$SWAYSOCK`.

use super::protocol::{read_reply, write_message, MessageType};
use crate::traits::WindowManager;
use crate::workspace::WorkspaceRecord;
use log::debug;
use serde::Deserialize;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

/// i3/sway-backed window manager.
///
/// Each method call opens a short-lived connection to the IPC socket.
#[derive(Debug, Clone)]
pub struct I3Wm {
    socket: PathBuf,
}

/// Errors that can occur when talking to i3/sway.
#[derive(Debug, thiserror::Error)]
#[error("i3 IPC error: {0}")]
pub struct I3Error(String);

impl I3Wm {
    /// Create a handle for the socket at `socket`.
    ///
    /// No connection is opened eagerly.
    pub fn new(socket: impl Into<PathBuf>) -> Self {
        Self {
            socket: socket.into(),
        }
    }

    /// Create a handle, preferring `explicit` over the environment.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, I3Error> {
        socket_path(explicit, |key| std::env::var(key).ok()).map(Self::new)
    }

    /// The socket this handle talks to.
    pub fn socket(&self) -> &Path {
        &self.socket
    }

    /// Send one request and return the raw reply payload.
    fn request(&self, kind: MessageType, payload: &str) -> Result<String, I3Error> {
        let mut stream = UnixStream::connect(&self.socket)
            .map_err(|e| I3Error(format!("connect to {}: {}", self.socket.display(), e)))?;
        write_message(&mut stream, kind, payload.as_bytes())
            .map_err(|e| I3Error(format!("write: {}", e)))?;
        let reply = read_reply(&mut stream, kind).map_err(|e| I3Error(format!("read: {}", e)))?;
        String::from_utf8(reply).map_err(|e| I3Error(format!("utf-8: {}", e)))
    }

    /// Run a command and check that every part of it succeeded.
    fn run_command(&self, command: &str) -> Result<(), I3Error> {
        debug!("run_command {}", command);
        let json = self.request(MessageType::RunCommand, command)?;
        let outcomes: Vec<CommandOutcome> =
            serde_json::from_str(&json).map_err(|e| I3Error(format!("parse: {}", e)))?;
        match outcomes.into_iter().find(|o| !o.success) {
            None => Ok(()),
            Some(failed) => Err(I3Error(format!(
                "command {:?} failed: {}",
                command,
                failed.error.unwrap_or_else(|| "unknown error".into())
            ))),
        }
    }
}

/// Resolve the IPC socket path.
///
/// Order: `explicit`, `$I3SOCK`, `$SWAYSOCK`.
fn socket_path(
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf, I3Error> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    ["I3SOCK", "SWAYSOCK"]
        .iter()
        .find_map(|key| env(key).filter(|v| !v.is_empty()))
        .map(PathBuf::from)
        .ok_or_else(|| I3Error("neither I3SOCK nor SWAYSOCK is set".into()))
}

/// Quote a workspace name for use inside an i3 command.
fn quote(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// One entry of the `RUN_COMMAND` reply.
#[derive(Deserialize)]
struct CommandOutcome {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl WindowManager for I3Wm {
    type Error = I3Error;

    fn workspaces(&self) -> Result<Vec<WorkspaceRecord>, Self::Error> {
        let json = self.request(MessageType::GetWorkspaces, "")?;
        serde_json::from_str(&json).map_err(|e| I3Error(format!("parse: {}", e)))
    }

    fn switch_to_workspace(&self, name: &str) -> Result<(), Self::Error> {
        self.run_command(&format!("workspace {}", quote(name)))
    }

    fn move_container_to_workspace(&self, name: &str) -> Result<(), Self::Error> {
        self.run_command(&format!("move container to workspace {}", quote(name)))
    }
}

//  Tests 
