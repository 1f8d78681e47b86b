//! Process-backed [`ToolRunner`].

use std::fs::File;
use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use autorecon_common::tooling::{Invocation, ToolOutcome, ToolRunner};

/// Spawns the program directly, without a shell in between, so the target
/// string never gets interpreted by one.
///
/// stdout and stderr are inherited: whatever the tool prints ends up on the
/// console. The child is killed if the future is dropped, which is what
/// happens when the user interrupts a run.
pub struct ShellRunner;

#[async_trait]
impl ToolRunner for ShellRunner {
    async fn invoke(&self, invocation: &Invocation) -> io::Result<ToolOutcome> {
        debug!("exec: {}", invocation.command_line());

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).kill_on_drop(true);

        if let Some(path) = &invocation.stdin {
            command.stdin(stdin_from(path));
        }

        let status = command.status().await?;

        Ok(ToolOutcome {
            exit_code: status.code(),
            output: invocation.output.clone(),
        })
    }
}

/// An unreadable input file turns into an empty stdin, the same as piping
/// `cat` of a missing file into the tool would.
fn stdin_from(path: &Path) -> Stdio {
    match File::open(path) {
        Ok(file) => Stdio::from(file),
        Err(e) => {
            debug!("stdin {} unavailable ({e}), using empty input", path.display());
            Stdio::null()
        }
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

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_exit_code_without_judging_it() {
        let invocation = Invocation::new("sh").arg("-c").arg("exit 3");
        let outcome = ShellRunner.invoke(&invocation).await.unwrap();

        assert_eq!(outcome.exit_code, Some(3));
        assert!(!outcome.success());
    }

    #[tokio::test]
    async fn feeds_stdin_and_reports_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("subs.txt");
        let output = dir.path().join("alive.txt");
        std::fs::write(&input, "www.example.com\napi.example.com\n").unwrap();

        let invocation = Invocation::new("sh")
            .arg("-c")
            .arg(format!("cat > '{}'", output.display()))
            .input_stdin(&input);
        let invocation = Invocation {
            output: Some(output.clone()),
            ..invocation
        };

        let outcome = ShellRunner.invoke(&invocation).await.unwrap();

        assert!(outcome.success());
        assert_eq!(outcome.output.as_deref(), Some(output.as_path()));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "www.example.com\napi.example.com\n"
        );
    }

    #[tokio::test]
    async fn missing_stdin_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("alive.txt");

        let invocation = Invocation::new("sh")
            .arg("-c")
            .arg(format!("cat > '{}'", output.display()))
            .input_stdin(&dir.path().join("subs.txt"));

        let outcome = ShellRunner.invoke(&invocation).await.unwrap();

        assert!(outcome.success());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
    }

    #[tokio::test]
    async fn unknown_program_is_an_error() {
        let invocation = Invocation::new("autorecon-no-such-tool-4f1c");
        let err = ShellRunner.invoke(&invocation).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
