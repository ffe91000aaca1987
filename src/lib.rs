//! **workspacer** — step through i3/sway workspaces.
//!
//! Besides the workspaces that exist, a configured range of numbered
//! workspaces (say `1` to `10`) is always navigable: missing numbers show up
//! as *placeholders* in the sequence, and switching to one creates it.
//!
//! # Architecture
//!
//! * [`directory`] builds the ordered sequence from a window-manager
//!   snapshot plus the managed names.
//! * [`navigator`] finds the current workspace and its cyclic neighbours.
//! * [`traits::WindowManager`] abstracts the window manager so that
//!   neither of the above is coupled to a specific IPC mechanism.
//! * [`switcher::Workspacer`] ties them together for one [`command::Command`].
//!
//! The concrete backend lives in [`i3`].

pub mod cli;
pub mod command;
pub mod config;
pub mod directory;
pub mod i3;
pub mod navigator;
pub mod switcher;
pub mod traits;
pub mod workspace;
