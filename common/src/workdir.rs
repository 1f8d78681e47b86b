//! # Working Directory
//!
//! One directory per run, named after the target and the local time the run
//! started at (second resolution), e.g. `scan_example.com_20261016_142233`.
//! It is created once and never cleaned up.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::artifact::Artifact;
use crate::target::Target;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Error)]
pub enum WorkDirError {
    #[error("could not create '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug)]
pub struct WorkDir {
    name: String,
    path: PathBuf,
}

pub fn dir_name(target: &Target, started_at: NaiveDateTime) -> String {
    format!("scan_{target}_{}", started_at.format(TIMESTAMP_FORMAT))
}

impl WorkDir {
    /// Creates the working directory for `target` under `base`.
    ///
    /// Missing parents are created, so a target containing `/` yields a nested
    /// directory. Finding a directory of the same name already in place (two
    /// runs within the same second) is not an error; the files inside get
    /// overwritten.
    pub fn create(
        base: &Path,
        target: &Target,
        started_at: NaiveDateTime,
    ) -> Result<Self, WorkDirError> {
        let name = dir_name(target, started_at);
        let path = base.join(&name);

        std::fs::create_dir_all(&path)
            .map_err(|source| WorkDirError::Create { path: path.clone(), source })?;

        Ok(Self { name, path })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn artifact(&self, artifact: Artifact) -> PathBuf {
        self.path.join(artifact.file_name())
    }

    /// The artifact path as shown to the user, relative to where the run started.
    pub fn display_artifact(&self, artifact: Artifact) -> String {
        format!("{}/{}", self.name, artifact.file_name())
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
