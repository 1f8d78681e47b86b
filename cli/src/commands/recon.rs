use std::path::Path;
use std::process::ExitCode;

use tracing::error;

use autorecon_common::artifact::Artifact;
use autorecon_common::config::Config;
use autorecon_common::delay::Delay;
use autorecon_common::target::Target;
use autorecon_core::delay::{NoDelay, RandomDelay};
use autorecon_core::environment::PathLocator;
use autorecon_core::recon::{ExitPolicy, ReconError, ReconService};
use autorecon_core::runner::ShellRunner;

use crate::terminal::print;

pub async fn recon(target: Target, cfg: &Config) -> anyhow::Result<ExitCode> {
    let delay: Box<dyn Delay> = if cfg.no_delay {
        Box::new(NoDelay)
    } else {
        Box::new(RandomDelay)
    };
    let policy = if cfg.strict {
        ExitPolicy::Enforce
    } else {
        ExitPolicy::Ignore
    };

    let service = ReconService::new(Box::new(PathLocator::from_env()), Box::new(ShellRunner), delay)
        .with_exit_policy(policy);

    match service.run(&target, Path::new(".")).await {
        Ok(report) => {
            print::summary(&report.workdir.display_artifact(Artifact::Findings));
            Ok(ExitCode::SUCCESS)
        }
        Err(ReconError::WorkDir(e)) => {
            error!("Error creating working directory: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!("Reconnaissance aborted: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
