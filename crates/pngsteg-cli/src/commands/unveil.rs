use std::path::PathBuf;

use clap::Args;
use pngsteg_core::Scheme;

use crate::CliResult;

/// Unveils the text message of a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message will be stored in that file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output file",
        required = true
    )]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, scheme: Scheme) -> CliResult<()> {
        pngsteg_core::commands::unveil(&self.media, &self.output_file, scheme)
    }
}
