#![cfg(all(test, unix))]
//! Real pipeline runs against stand-in shell scripts named after the tools.
//!
//! Each script appends its name and arguments to a shared log and produces
//! output in the file it was handed via `-o`.

use autorecon_common::artifact::Artifact;
use autorecon_common::target::Target;
use autorecon_core::delay::NoDelay;
use autorecon_core::environment::PathLocator;
use autorecon_core::recon::{ExitPolicy, ReconError, ReconService, ScanMode};
use autorecon_core::runner::ShellRunner;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

struct FakeTools {
    bin: tempfile::TempDir,
    log: PathBuf,
}

impl FakeTools {
    /// `bodies` are `(tool, script body)`; `$out` holds the `-o` value.
    fn install(bodies: &[(&str, &str)]) -> Self {
        let bin = tempfile::tempdir().unwrap();
        let log = bin.path().join("calls.log");

        for (tool, body) in bodies {
            let script = format!(
                "#!/bin/sh\n\
                 echo \"{tool} $*\" >> '{log}'\n\
                 out=''\n\
                 while [ $# -gt 0 ]; do\n\
                 \x20 if [ \"$1\" = '-o' ]; then out=\"$2\"; fi\n\
                 \x20 shift\n\
                 done\n\
                 {body}\n",
                log = log.display(),
            );
            let path = bin.path().join(tool);
            std::fs::write(&path, script).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        Self { bin, log }
    }

    fn service(&self, policy: ExitPolicy) -> ReconService {
        ReconService::new(
            Box::new(PathLocator::with_search_path(self.bin.path())),
            Box::new(ShellRunner),
            Box::new(NoDelay),
        )
        .with_exit_policy(policy)
    }

    fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

const WORKING_TOOLS: [(&str, &str); 3] = [
    ("subfinder", "printf 'www.example.com\\napi.example.com\\n' > \"$out\""),
    ("httpx", "sed 's|^|https://|' > \"$out\""),
    ("nuclei", "echo '[medium] missing-header https://api.example.com' > \"$out\""),
];

#[tokio::test]
async fn tools_run_in_order_and_chain_files() {
    let tools = FakeTools::install(&WORKING_TOOLS);
    let base = tempfile::tempdir().unwrap();
    let target = Target::from_str("example.com").unwrap();

    let report = tools
        .service(ExitPolicy::Ignore)
        .run(&target, base.path())
        .await
        .unwrap();

    assert_eq!(report.mode, ScanMode::Real);

    let subs = path_str(&report.workdir.artifact(Artifact::Subdomains));
    let alive = path_str(&report.workdir.artifact(Artifact::AliveHosts));
    let vulns = path_str(&report.workdir.artifact(Artifact::Findings));
    assert_eq!(
        tools.calls(),
        vec![
            format!("subfinder -d example.com -o {subs} -silent"),
            format!("httpx -silent -o {alive}"),
            format!("nuclei -l {alive} -o {vulns} -silent"),
        ]
    );

    // httpx read subs.txt on stdin
    assert_eq!(
        std::fs::read_to_string(&alive).unwrap(),
        "https://www.example.com\nhttps://api.example.com\n"
    );
    assert_eq!(
        std::fs::read_to_string(report.findings()).unwrap(),
        "[medium] missing-header https://api.example.com\n"
    );
}

#[tokio::test]
async fn failing_and_silent_tools_do_not_stop_the_pipeline() {
    let tools = FakeTools::install(&[
        ("subfinder", "exit 1"),
        ("httpx", "cat > /dev/null; exit 2"),
        ("nuclei", "touch \"$out\""),
    ]);
    let base = tempfile::tempdir().unwrap();
    let target = Target::from_str("example.com").unwrap();

    let report = tools
        .service(ExitPolicy::Ignore)
        .run(&target, base.path())
        .await
        .unwrap();

    assert_eq!(tools.calls().len(), 3);
    assert!(!report.workdir.artifact(Artifact::Subdomains).exists());
    assert!(report.findings().exists());
}

#[tokio::test]
async fn strict_policy_stops_at_the_failing_stage() {
    let tools = FakeTools::install(&[
        ("subfinder", "touch \"$out\""),
        ("httpx", "exit 7"),
        ("nuclei", "touch \"$out\""),
    ]);
    let base = tempfile::tempdir().unwrap();
    let target = Target::from_str("example.com").unwrap();

    let err = tools
        .service(ExitPolicy::Enforce)
        .run(&target, base.path())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReconError::StageFailed {
            tool: "httpx",
            exit_code: Some(7)
        }
    ));
    assert_eq!(tools.calls().len(), 2);
}

#[tokio::test]
async fn one_missing_tool_means_simulation() {
    let tools = FakeTools::install(&WORKING_TOOLS[..2]);
    let base = tempfile::tempdir().unwrap();
    let target = Target::from_str("example.com").unwrap();

    let report = tools
        .service(ExitPolicy::Ignore)
        .run(&target, base.path())
        .await
        .unwrap();

    assert_eq!(
        report.mode,
        ScanMode::Simulated {
            missing: vec!["nuclei".into()]
        }
    );
    assert!(tools.calls().is_empty());
}
