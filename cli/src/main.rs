mod commands;
mod interrupt;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, recon, tools};
use interrupt::Interrupt;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let mut interrupt = Interrupt::listen()?;

    logging::init_logging()?;

    let cfg = commands.config();
    print::initialize(&cfg);

    if commands.check_tools {
        print::header("checking environment");
        return Ok(tools::check_tools());
    }

    let Some(target) = commands.target() else {
        print::usage(&CommandLine::usage());
        return Ok(ExitCode::FAILURE);
    };

    tokio::select! {
        result = recon::recon(target, &cfg) => result,
        Some(()) = interrupt.recv() => {
            print::interrupted();
            Ok(ExitCode::SUCCESS)
        }
    }
}
