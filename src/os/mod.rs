//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system services the cryptographic core depends on.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same `sys_random`
//! surface, allowing higher-level code to remain fully portable.
//!
//! Current capabilities:
//! - cryptographically secure randomness
//! - monotonic timestamps for elapsed-time measurements
//!
//! All exposed functions are safe wrappers around low-level OS APIs.

pub mod time;

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
