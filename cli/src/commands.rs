pub mod recon;
pub mod tools;

use std::str::FromStr;

use autorecon_common::config::Config;
use autorecon_common::target::Target;
use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(name = "autorecon")]
#[command(version, about = "Automated reconnaissance wrapper: subfinder, httpx, nuclei.")]
pub struct CommandLine {
    /// Domain to run reconnaissance against
    pub target: Option<String>,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Do not clear the terminal on startup
    #[arg(long)]
    pub no_clear: bool,

    /// Skip the pauses of the simulated pipeline
    #[arg(long)]
    pub no_delay: bool,

    /// Abort the pipeline when a tool exits with a non-zero status
    #[arg(long)]
    pub strict: bool,

    /// Show where the required tools resolve and exit
    #[arg(long)]
    pub check_tools: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            no_clear: self.no_clear,
            no_delay: self.no_delay,
            strict: self.strict,
        }
    }

    /// The target, if one was given. An empty string counts as none.
    pub fn target(&self) -> Option<Target> {
        self.target.as_deref().and_then(|s| Target::from_str(s).ok())
    }

    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}
