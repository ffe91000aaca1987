//! The boundary between workspacer and a concrete window manager.
//!
//! The [`Workspacer`](crate::switcher::Workspacer) only depends on
//! [`WindowManager`]; the i3/sway IPC backend lives in [`i3`](crate::i3).

use crate::workspace::WorkspaceRecord;

/// Abstraction over a window manager that can report its workspaces and
/// act on them.
///
/// An implementation might talk to i3 or sway over IPC, or it might be a
/// recording stub used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// All workspaces, in the window manager's own order.
    fn workspaces(&self) -> Result<Vec<WorkspaceRecord>, Self::Error>;

    /// Switch to the workspace called `name`, creating it if needed.
    fn switch_to_workspace(&self, name: &str) -> Result<(), Self::Error>;

    /// Move the focused container to the workspace called `name`, creating
    /// it if needed.  Focus stays where it is.
    fn move_container_to_workspace(&self, name: &str) -> Result<(), Self::Error>;
}
