//! # External Tool Capabilities
//!
//! The two things the pipeline needs from the host system: finding an
//! executable, and running one. Both are traits so the orchestrator can be
//! exercised without any of the real tools installed.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Resolves executable names against some search path.
pub trait ToolLocator: Send + Sync {
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Runs one external tool invocation to completion.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Blocks (asynchronously) until the tool exits. There is no timeout.
    ///
    /// An `Err` means the process could not be started at all. A tool that ran
    /// and failed is an `Ok` with a non-zero [`ToolOutcome::exit_code`]; what to
    /// do about that is the caller's decision.
    async fn invoke(&self, invocation: &Invocation) -> io::Result<ToolOutcome>;
}

/// A single tool call: program, arguments and the files it reads and writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    /// File to feed the tool on stdin.
    pub stdin: Option<PathBuf>,
    /// The file this stage consumes, whether via stdin or an argument.
    pub input: Option<PathBuf>,
    /// The file this stage is expected to produce.
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolOutcome {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub output: Option<PathBuf>,
}

impl ToolOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl Invocation {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            stdin: None,
            input: None,
            output: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Passes `path` as the value of `flag` and records it as the stage input.
    pub fn input_flag(mut self, flag: &str, path: &Path) -> Self {
        self.input = Some(path.to_path_buf());
        self.arg(flag).arg(path)
    }

    /// Streams `path` into the tool's stdin and records it as the stage input.
    pub fn input_stdin(mut self, path: &Path) -> Self {
        self.stdin = Some(path.to_path_buf());
        self.input = Some(path.to_path_buf());
        self
    }

    /// Passes `path` as the value of `flag` and records it as the stage output.
    pub fn output_flag(mut self, flag: &str, path: &Path) -> Self {
        self.output = Some(path.to_path_buf());
        self.arg(flag).arg(path)
    }

    /// The invocation as it would be typed into a shell, for logs.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        if let Some(stdin) = &self.stdin {
            line.push_str(&format!(" < {}", stdin.display()));
        }
        line
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
