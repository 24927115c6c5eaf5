use std::path::PathBuf;

use clap::Args;
use pngsteg_core::Scheme;

/// Unveils one byte for every pixel of a PNG image
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self, scheme: Scheme) -> crate::CliResult<()> {
        pngsteg_core::api::unveil_raw::prepare()
            .using_scheme(scheme)
            .from_secret_file(self.media)
            .into_raw_file(self.output_file)
            .execute()
    }
}
