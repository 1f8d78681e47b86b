//! The real pipeline: subfinder, then httpx, then nuclei.
//!
//! Each stage reads the file the previous one was told to write, whether or
//! not that file ever appeared. With the default [`ExitPolicy::Ignore`] tool
//! failures are not looked at and every stage is attempted.

use tracing::{Instrument, debug, info, info_span, warn};

use autorecon_common::artifact::{self, Artifact};
use autorecon_common::success;
use autorecon_common::target::Target;
use autorecon_common::tooling::{Invocation, ToolOutcome, ToolRunner};
use autorecon_common::workdir::WorkDir;

use super::ReconError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Subdomain enumeration.
    Enumeration,
    /// HTTP liveness probing.
    Probing,
    /// Vulnerability template scanning.
    Scanning,
}

/// What to do when a tool exits non-zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Carry on with the next stage regardless.
    #[default]
    Ignore,
    /// Abort the pipeline with [`ReconError::StageFailed`].
    Enforce,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Enumeration, Stage::Probing, Stage::Scanning];

    pub fn tool(self) -> &'static str {
        match self {
            Stage::Enumeration => "subfinder",
            Stage::Probing => "httpx",
            Stage::Scanning => "nuclei",
        }
    }

    pub fn artifact(self) -> Artifact {
        match self {
            Stage::Enumeration => Artifact::Subdomains,
            Stage::Probing => Artifact::AliveHosts,
            Stage::Scanning => Artifact::Findings,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Stage::Enumeration => "Subfinder",
            Stage::Probing => "HTTPX (web probing)",
            Stage::Scanning => "Nuclei (vulnerability scanning)",
        }
    }

    pub fn invocation(self, target: &Target, workdir: &WorkDir) -> Invocation {
        let output = workdir.artifact(self.artifact());
        match self {
            Stage::Enumeration => Invocation::new(self.tool())
                .arg("-d")
                .arg(target.as_str())
                .output_flag("-o", &output)
                .arg("-silent"),
            Stage::Probing => Invocation::new(self.tool())
                .input_stdin(&workdir.artifact(Artifact::Subdomains))
                .arg("-silent")
                .output_flag("-o", &output),
            Stage::Scanning => Invocation::new(self.tool())
                .input_flag("-l", &workdir.artifact(Artifact::AliveHosts))
                .output_flag("-o", &output)
                .arg("-silent"),
        }
    }
}

impl ExitPolicy {
    pub fn check(self, stage: Stage, outcome: &ToolOutcome) -> Result<(), ReconError> {
        if self == ExitPolicy::Enforce && !outcome.success() {
            return Err(ReconError::StageFailed {
                tool: stage.tool(),
                exit_code: outcome.exit_code,
            });
        }
        Ok(())
    }
}

pub struct RealPipeline<'a> {
    runner: &'a dyn ToolRunner,
    policy: ExitPolicy,
}

impl<'a> RealPipeline<'a> {
    pub fn new(runner: &'a dyn ToolRunner, policy: ExitPolicy) -> Self {
        Self { runner, policy }
    }

    pub async fn run(&self, target: &Target, workdir: &WorkDir) -> Result<(), ReconError> {
        for stage in Stage::ALL {
            info!("Running module: {}...", stage.description());

            let invocation = stage.invocation(target, workdir);
            let span = info_span!("running", tool = stage.tool());
            self.run_stage(stage, &invocation).instrument(span).await?;

            if stage == Stage::Enumeration {
                report_subdomains(workdir);
            }
        }

        success!("Tool pipeline finished.");
        Ok(())
    }

    async fn run_stage(&self, stage: Stage, invocation: &Invocation) -> Result<(), ReconError> {
        match self.runner.invoke(invocation).await {
            Ok(outcome) => {
                if !outcome.success() {
                    debug!("{} exited with {:?}", stage.tool(), outcome.exit_code);
                }
                self.policy.check(stage, &outcome)
            }
            Err(source) => match self.policy {
                ExitPolicy::Ignore => {
                    warn!("Could not start {}: {source}", stage.tool());
                    Ok(())
                }
                ExitPolicy::Enforce => Err(ReconError::Spawn {
                    tool: stage.tool(),
                    source,
                }),
            },
        }
    }
}

/// Logs how many subdomains the first stage wrote, if it wrote anything.
fn report_subdomains(workdir: &WorkDir) {
    match artifact::count_lines(&workdir.artifact(Artifact::Subdomains)) {
        Ok(Some(count)) => success!("Subdomains found: {count}"),
        Ok(None) => {}
        Err(e) => debug!("could not count subdomains: {e}"),
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
