use clap::{Command, CommandFactory, Parser, Subcommand, ValueEnum};
use pngsteg_core::Scheme;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(name = "pngsteg", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// How the message bytes are laid out in the pixels
    #[arg(short, long, global = true, value_enum, default_value_t = SchemeArg::Nibble)]
    pub scheme: SchemeArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
}

/// the `hide` subcommand alone, its help is printed when there is nothing to hide
pub fn hide_command() -> Command {
    let mut cli = CliArgs::command();
    cli.build();

    let hide = cli.find_subcommand("hide").cloned();
    hide.unwrap_or(cli)
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeArg {
    /// Message nibbles replace red and green
    #[value(alias = "a")]
    Nibble,
    /// Message nibbles go into the low bits of red and green, stored as indexed PNG
    #[value(alias = "b")]
    Palette,
    /// Two message bits in each of red, green, blue and alpha
    #[value(alias = "c")]
    Spread,
    /// Like nibble, but only the first 30 rows are stored
    #[value(alias = "d")]
    Truncated,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Nibble => Scheme::Nibble,
            SchemeArg::Palette => Scheme::PaletteNibble,
            SchemeArg::Spread => Scheme::Spread,
            SchemeArg::Truncated => Scheme::TruncatedNibble,
        }
    }
}
