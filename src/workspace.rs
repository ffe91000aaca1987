//! The workspace entity.
//!
//! A [`Workspace`] is an immutable value: it is either built from a
//! [`WorkspaceRecord`] reported by the window manager, or synthesized as a
//! *placeholder* for a managed name that has not been created yet.
//!
//! Lookups inside a workspace sequence compare whole values, so two
//! workspaces are only equal when name, creation state, visibility and
//! focus all match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subset of one entry of the i3/sway `GET_WORKSPACES` reply.
///
/// Unknown fields (`num`, `rect`, `output`, `urgent`, …) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkspaceRecord {
    pub name: String,
    pub visible: bool,
    pub focused: bool,
}

/// A workspace in the ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Workspace {
    /// Name used by the window manager (e.g. `"3"` or `"mail"`).
    pub name: String,
    /// `false` for placeholders that only exist in this process.
    pub is_created: bool,
    /// Shown on some output.  Always `false` for placeholders.
    pub is_visible: bool,
    /// Holds input focus.  Always `false` for placeholders.
    pub is_focused: bool,
}

impl Workspace {
    /// A workspace that exists in the window manager.
    pub fn created(name: impl Into<String>, is_visible: bool, is_focused: bool) -> Self {
        Self {
            name: name.into(),
            is_created: true,
            is_visible,
            is_focused,
        }
    }

    /// A workspace that does not exist yet.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_created: false,
            is_visible: false,
            is_focused: false,
        }
    }

    /// Whether this is the workspace the user is looking at.
    pub fn is_current(&self) -> bool {
        self.is_visible && self.is_focused
    }
}

impl From<WorkspaceRecord> for Workspace {
    fn from(record: WorkspaceRecord) -> Self {
        Self::created(record.name, record.visible, record.focused)
    }
}

/// JSON string literal with every non-ASCII character written as `\uXXXX`
/// (UTF-16 units, so astral characters become surrogate pairs).
fn ascii_json(name: &str) -> Result<String, serde_json::Error> {
    let quoted = serde_json::to_string(name)?;
    let mut out = String::with_capacity(quoted.len());
    for c in quoted.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units).iter() {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    Ok(out)
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = ascii_json(&self.name).map_err(|_| fmt::Error)?;
        write!(f, "<Workspace {}", quoted)?;
        if !self.is_created {
            write!(f, " create")?;
        }
        if self.is_visible {
            write!(f, " visible")?;
        }
        if self.is_focused {
            write!(f, " focused")?;
        }
        write!(f, ">")
    }
}
