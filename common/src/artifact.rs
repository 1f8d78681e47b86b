//! The three plain-text files a run leaves behind.

use std::io;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    /// One discovered hostname per line.
    Subdomains,
    /// One responsive host per line. Only the real pipeline writes it.
    AliveHosts,
    /// One finding per line.
    Findings,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [Artifact::Subdomains, Artifact::AliveHosts, Artifact::Findings];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Subdomains => "subs.txt",
            Artifact::AliveHosts => "alive.txt",
            Artifact::Findings => "vulns.txt",
        }
    }
}

/// Counts the lines of an artifact file.
///
/// A trailing line without a newline still counts. Returns `Ok(None)` when the
/// file does not exist, which callers treat as "nothing to report".
pub fn count_lines(path: &Path) -> io::Result<Option<usize>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
    let unterminated = usize::from(bytes.last().is_some_and(|&b| b != b'\n'));
    Ok(Some(newlines + unterminated))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
