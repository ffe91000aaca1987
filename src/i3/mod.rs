//! i3/sway-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait, powered by the i3
//! IPC socket (which sway implements as well).
//!
//! Nothing outside this module should reference i3 directly.

pub mod protocol;
pub mod wm;
