use std::process::ExitCode;

use colored::*;

use autorecon_common::tooling::ToolLocator;
use autorecon_core::environment::{PathLocator, REQUIRED_TOOLS};

use crate::terminal::{colors, print};

pub fn check_tools() -> ExitCode {
    let locator = PathLocator::from_env();
    let width = REQUIRED_TOOLS.iter().map(|tool| tool.len()).max().unwrap_or(0);
    print::GLOBAL_KEY_WIDTH.set(width);

    let mut missing = 0;
    for tool in REQUIRED_TOOLS {
        match locator.locate(tool) {
            Some(path) => {
                let location = path.display().to_string().color(colors::ACCENT);
                print::aligned_line(tool, location)
            }
            None => {
                missing += 1;
                print::aligned_line(tool, "not found".red().bold())
            }
        }
    }

    let verdict = match missing {
        0 => "real pipeline available".green().bold(),
        _ => "compatibility mode will be used".yellow().bold(),
    };
    print::print_status(verdict.to_string());
    ExitCode::SUCCESS
}
