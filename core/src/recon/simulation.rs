//! Compatibility mode: fabricated artifacts for environments without the tools.
//!
//! File contents are fixed, only the pauses between stages vary. The probing
//! stage reports `alive.txt` as saved but never writes it; the output of a
//! simulated run is `subs.txt` and `vulns.txt` only.

use std::path::Path;

use tracing::{Instrument, info, info_span, warn};

use autorecon_common::artifact::Artifact;
use autorecon_common::delay::{Delay, DelayWindow};
use autorecon_common::target::Target;
use autorecon_common::workdir::WorkDir;
use autorecon_common::{finding, success};

use super::ReconError;

pub const SUBDOMAIN_LABELS: [&str; 8] =
    ["www", "mail", "dev", "api", "test", "portal", "vpn", "admin"];

pub const FINDING_IDS: [&str; 3] = ["CVE-2023-XXXX", "XSS-Reflected", "Misconfiguration-Headers"];

const FINDING_SEVERITY: &str = "CRITICAL";
const FINDING_HOST_LABEL: &str = "api";

const NOTICE_PAUSE: DelayWindow = DelayWindow::fixed(1.0);
const ENUMERATION_PAUSE: DelayWindow = DelayWindow::between(1.5, 3.0);
const PROBING_PAUSE: DelayWindow = DelayWindow::between(1.0, 2.0);
const SCANNING_PAUSE: DelayWindow = DelayWindow::between(2.0, 4.0);

pub struct Simulation<'a> {
    delay: &'a dyn Delay,
}

impl<'a> Simulation<'a> {
    pub fn new(delay: &'a dyn Delay) -> Self {
        Self { delay }
    }

    pub async fn run(&self, target: &Target, workdir: &WorkDir) -> Result<(), ReconError> {
        warn!("Limited environment detected. Running in COMPATIBILITY MODE...");
        self.delay.pause(NOTICE_PAUSE).await;

        self.enumerate(target, workdir)
            .instrument(info_span!("simulating", tool = "subfinder"))
            .await?;
        self.probe()
            .instrument(info_span!("simulating", tool = "httpx"))
            .await;
        self.scan(target, workdir)
            .instrument(info_span!("simulating", tool = "nuclei"))
            .await?;

        success!("Analysis completed.");
        Ok(())
    }

    async fn enumerate(&self, target: &Target, workdir: &WorkDir) -> Result<(), ReconError> {
        info!("Starting subdomain enumeration on {target}...");
        self.delay.pause(ENUMERATION_PAUSE).await;

        let hosts = subdomains(target);
        write_lines(&workdir.artifact(Artifact::Subdomains), &hosts).await?;

        success!("Subfinder completed. Found {} subdomains.", hosts.len());
        Ok(())
    }

    async fn probe(&self) {
        info!("Validating web assets with HTTPX...");
        self.delay.pause(PROBING_PAUSE).await;
        success!(
            "Active services identified and saved to {}",
            Artifact::AliveHosts.file_name()
        );
    }

    async fn scan(&self, target: &Target, workdir: &WorkDir) -> Result<(), ReconError> {
        info!("Running vulnerability scan (Nuclei Templates)...");
        self.delay.pause(SCANNING_PAUSE).await;

        write_lines(&workdir.artifact(Artifact::Findings), &findings(target)).await?;
        for id in FINDING_IDS {
            finding!("{id} detected!");
        }
        Ok(())
    }
}

/// `<label>.<target>` for every simulated label, in order.
pub fn subdomains(target: &Target) -> Vec<String> {
    SUBDOMAIN_LABELS
        .iter()
        .map(|label| target.subdomain(label))
        .collect()
}

/// `[CRITICAL] <id> found on api.<target>` for every simulated finding, in order.
pub fn findings(target: &Target) -> Vec<String> {
    let host = target.subdomain(FINDING_HOST_LABEL);
    FINDING_IDS
        .iter()
        .map(|id| format!("[{FINDING_SEVERITY}] {id} found on {host}"))
        .collect()
}

async fn write_lines(path: &Path, lines: &[String]) -> Result<(), ReconError> {
    let contents: String = lines.iter().map(|line| format!("{line}\n")).collect();
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ReconError::Artifact {
            path: path.to_path_buf(),
            source,
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
