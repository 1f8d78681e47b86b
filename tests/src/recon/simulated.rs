#![cfg(test)]
use autorecon_common::artifact::Artifact;
use autorecon_common::target::Target;
use autorecon_common::tooling::ToolLocator;
use autorecon_core::delay::NoDelay;
use autorecon_core::environment::PathLocator;
use autorecon_core::recon::{ReconService, ScanMode};
use autorecon_core::runner::ShellRunner;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use std::str::FromStr;

/// Resolves nothing, like a machine without any of the tools installed.
struct BareSystem;

impl ToolLocator for BareSystem {
    fn locate(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

fn service() -> ReconService {
    ReconService::new(Box::new(BareSystem), Box::new(ShellRunner), Box::new(NoDelay))
}

fn at(secs: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(10, 15, secs)
        .unwrap()
}

/// `autorecon example.com` on a machine with none of the tools installed.
#[tokio::test]
async fn example_com_without_tools() {
    let base = tempfile::tempdir().unwrap();
    let target = Target::from_str("example.com").unwrap();

    let report = service().run(&target, base.path()).await.unwrap();

    assert!(matches!(report.mode, ScanMode::Simulated { .. }));
    assert!(report.workdir.name().starts_with("scan_example.com_"));

    let subs = std::fs::read_to_string(report.workdir.artifact(Artifact::Subdomains)).unwrap();
    let expected: Vec<String> = ["www", "mail", "dev", "api", "test", "portal", "vpn", "admin"]
        .iter()
        .map(|label| format!("{label}.example.com"))
        .collect();
    assert_eq!(subs.lines().collect::<Vec<_>>(), expected);

    let vulns = std::fs::read_to_string(report.findings()).unwrap();
    let vulns: Vec<&str> = vulns.lines().collect();
    assert_eq!(vulns.len(), 3);
    assert!(vulns.iter().all(|line| line.starts_with("[CRITICAL] ")));
    assert_eq!(vulns[2], "[CRITICAL] Misconfiguration-Headers found on api.example.com");

    assert!(!report.workdir.artifact(Artifact::AliveHosts).exists());
}

/// Two runs a second apart: two directories, identical contents.
#[tokio::test]
async fn repeated_runs_get_distinct_directories() {
    let base = tempfile::tempdir().unwrap();
    let target = Target::from_str("example.com").unwrap();
    let service = service();

    let first = service.run_at(&target, base.path(), at(1)).await.unwrap();
    let second = service.run_at(&target, base.path(), at(2)).await.unwrap();

    assert_ne!(first.workdir.path(), second.workdir.path());
    assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 2);

    for artifact in [Artifact::Subdomains, Artifact::Findings] {
        assert_eq!(
            std::fs::read(first.workdir.artifact(artifact)).unwrap(),
            std::fs::read(second.workdir.artifact(artifact)).unwrap(),
        );
    }
}

/// Only the synthetic host changes between targets.
#[tokio::test]
async fn contents_differ_only_by_target() {
    let base = tempfile::tempdir().unwrap();
    let service = service();

    let a = service
        .run_at(&Target::from_str("a.test").unwrap(), base.path(), at(3))
        .await
        .unwrap();
    let b = service
        .run_at(&Target::from_str("b.test").unwrap(), base.path(), at(3))
        .await
        .unwrap();

    let a_vulns = std::fs::read_to_string(a.findings()).unwrap();
    let b_vulns = std::fs::read_to_string(b.findings()).unwrap();
    assert_eq!(a_vulns.replace("a.test", "b.test"), b_vulns);
}

/// An empty search path means the simulation, whatever the host has installed.
#[tokio::test]
async fn empty_search_path_falls_back_to_simulation() {
    let base = tempfile::tempdir().unwrap();
    let service = ReconService::new(
        Box::new(PathLocator::with_search_path("")),
        Box::new(ShellRunner),
        Box::new(NoDelay),
    );

    let report = service
        .run(&Target::from_str("example.com").unwrap(), base.path())
        .await
        .unwrap();

    assert_eq!(
        report.mode,
        ScanMode::Simulated {
            missing: vec!["subfinder".into(), "httpx".into(), "nuclei".into()]
        }
    );
}
