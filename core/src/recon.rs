//! # Recon Service
//!
//! Implements the one use case of the tool: point it at a target, get a
//! working directory full of artifacts.
//!
//! The service creates the working directory, asks the [`ToolLocator`]
//! whether every tool the real pipeline needs is present, then hands the run
//! to either the [`RealPipeline`] or the [`Simulation`]. Everything runs
//! sequentially; the only concurrency in the process is the interrupt
//! listener living in the CLI.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::{info, warn};

use autorecon_common::artifact::Artifact;
use autorecon_common::delay::Delay;
use autorecon_common::target::Target;
use autorecon_common::tooling::{ToolLocator, ToolRunner};
use autorecon_common::workdir::{WorkDir, WorkDirError};

use crate::environment::{self, REQUIRED_TOOLS};

mod pipeline;
mod simulation;

pub use pipeline::{ExitPolicy, RealPipeline, Stage};
pub use simulation::{FINDING_IDS, SUBDOMAIN_LABELS, Simulation};

#[derive(Debug, Error)]
pub enum ReconError {
    #[error(transparent)]
    WorkDir(#[from] WorkDirError),

    #[error("failed to write '{}': {source}", .path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not start {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with {}", exit_status(.exit_code))]
    StageFailed {
        tool: &'static str,
        exit_code: Option<i32>,
    },
}

fn exit_status(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Which of the two pipelines produced the artifacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanMode {
    Real,
    Simulated { missing: Vec<String> },
}

#[derive(Debug)]
pub struct ScanReport {
    pub workdir: WorkDir,
    pub mode: ScanMode,
}

impl ScanReport {
    pub fn findings(&self) -> PathBuf {
        self.workdir.artifact(Artifact::Findings)
    }
}

pub struct ReconService {
    locator: Box<dyn ToolLocator>,
    runner: Box<dyn ToolRunner>,
    delay: Box<dyn Delay>,
    policy: ExitPolicy,
}

impl ReconService {
    pub fn new(
        locator: Box<dyn ToolLocator>,
        runner: Box<dyn ToolRunner>,
        delay: Box<dyn Delay>,
    ) -> Self {
        Self {
            locator,
            runner,
            delay,
            policy: ExitPolicy::default(),
        }
    }

    pub fn with_exit_policy(mut self, policy: ExitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs reconnaissance against `target`, writing into a fresh working
    /// directory under `base`.
    pub async fn run(&self, target: &Target, base: &Path) -> Result<ScanReport, ReconError> {
        self.run_at(target, base, Local::now().naive_local()).await
    }

    /// Same as [`ReconService::run`] with an explicit start time, which only
    /// feeds the working directory name.
    pub async fn run_at(
        &self,
        target: &Target,
        base: &Path,
        started_at: NaiveDateTime,
    ) -> Result<ScanReport, ReconError> {
        let workdir = WorkDir::create(base, target, started_at)?;
        info!("Target set: {target}");
        info!("Results directory: ./{}", workdir.name());

        let missing = environment::missing_tools(self.locator.as_ref(), &REQUIRED_TOOLS);

        let mode = if missing.is_empty() {
            RealPipeline::new(self.runner.as_ref(), self.policy)
                .run(target, &workdir)
                .await?;
            ScanMode::Real
        } else {
            warn!("Missing external tools: {}", missing.join(", "));
            Simulation::new(self.delay.as_ref()).run(target, &workdir).await?;
            ScanMode::Simulated { missing }
        };

        Ok(ScanReport { workdir, mode })
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
