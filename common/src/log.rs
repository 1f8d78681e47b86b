//! # Console Severity
//!
//! The four log levels the tool speaks in, and the single function that turns
//! one of them plus a message into a console line.
//!
//! Events still travel through `tracing`. `tracing` has no "success" level, so
//! successes are INFO events on [`SUCCESS_TARGET`]; the [`success!`] macro
//! hides that detail from call sites.

use colored::*;
use tracing::Level;

/// Target for INFO events that should be rendered as successes.
pub const SUCCESS_TARGET: &str = "autorecon::success";

/// Target for the indented finding echo printed while scanning.
pub const FINDING_TARGET: &str = "autorecon::finding";

/// Target for raw presentation lines (banner, summary box).
pub const PRINT_TARGET: &str = "autorecon::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! finding {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: $crate::log::FINDING_TARGET, $($arg)*)
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warn,
    Error,
}

impl Severity {
    /// Maps a `tracing` event onto a console severity.
    ///
    /// DEBUG and TRACE collapse into [`Severity::Info`].
    pub fn from_event(level: &Level, target: &str) -> Self {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO if target == SUCCESS_TARGET => Severity::Success,
            _ => Severity::Info,
        }
    }

    pub fn tag(self) -> ColoredString {
        match self {
            Severity::Info => "[*]".blue(),
            Severity::Success => "[+]".green(),
            Severity::Warn => "[!]".yellow(),
            Severity::Error => "[ERROR]".red(),
        }
    }
}

pub fn format_line(severity: Severity, timestamp: &str, message: &str) -> String {
    format!("[{timestamp}] {} {message}", severity.tag())
}

pub fn format_finding(message: &str) -> String {
    format!("    -> {} {message}", "[VULN]".red())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
