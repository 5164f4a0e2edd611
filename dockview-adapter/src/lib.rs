//! Host adapter utilities for the `dockview` crate.
//!
//! The `dockview` crate is UI-agnostic and focuses on placement math and visibility state. This
//! crate provides the framework-neutral glue a host component needs:
//!
//! - Show/hide trigger binding with exact listener removal
//! - Frame-deferred repositioning and content-change re-runs
//! - Mount/teardown lifecycle that releases every listener and the content observer
//! - A string-typed property surface (`showEvents`, `hideEvents`, `dockingSide`, `offsets`)
//!
//! This crate is intentionally framework-agnostic (no web-sys/gtk bindings). Implement [`Host`]
//! for your environment.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binding;
mod host;
mod key;
mod options;
mod popover;


pub use binding::{BindError, Binding, Bindings, InstalledListener};
pub use host::{FrameTicket, Host, ListenerId, Notification, Trigger};
pub use key::TargetId;
pub use options::{ConfigError, PopoverOptions, PopoverProps};
pub use popover::Popover;
