//! # Environment Prober
//!
//! Decides whether the real pipeline can run by looking for its executables
//! on the search path. A missing tool is an expected outcome, not an error:
//! it is what routes a run into the simulation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use autorecon_common::tooling::ToolLocator;

/// Executables the real pipeline shells out to, in pipeline order.
pub const REQUIRED_TOOLS: [&str; 3] = ["subfinder", "httpx", "nuclei"];

/// Returns the subset of `tools` that `locator` cannot resolve, in input order.
pub fn missing_tools(locator: &dyn ToolLocator, tools: &[&str]) -> Vec<String> {
    tools
        .iter()
        .filter(|tool| locator.locate(tool).is_none())
        .map(|tool| tool.to_string())
        .collect()
}

/// Looks tools up in the directories of a `PATH`-style search path.
pub struct PathLocator {
    search_path: Option<OsString>,
}

impl PathLocator {
    /// Uses the `PATH` of the current process.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
        }
    }

    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl ToolLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        std::env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| candidates(&dir, name))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name), dir.join(format!("{name}.exe"))]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
