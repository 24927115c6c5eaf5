use clap::Parser;
use log::debug;
use pngsteg_core::Scheme;

use crate::cli::{hide_command, CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = pngsteg_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let scheme = Scheme::from(args.scheme);
    debug!("using scheme {scheme:?}");

    match args.command {
        Commands::Hide(hide) if hide.has_nothing_to_hide() => {
            hide_command().print_help()?;
            Ok(())
        }
        Commands::Hide(hide) => hide.run(scheme),
        Commands::Unveil(unveil) => unveil.run(scheme),
        Commands::UnveilRaw(unveil_raw) => unveil_raw.run(scheme),
    }
}
