//! Shared models and capability traits for `autorecon`.
//!
//! Nothing in here touches a process or the terminal directly. The [`tooling`]
//! and [`delay`] traits are the seams `autorecon-core` plugs its implementations
//! into, and the [`log`] helpers are what the CLI formatter renders with.

pub mod artifact;
pub mod config;
pub mod delay;
pub mod log;
pub mod target;
pub mod tooling;
pub mod workdir;
