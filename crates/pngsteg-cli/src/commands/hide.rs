use std::path::PathBuf;

use clap::Args;
use pngsteg_core::Scheme;

use crate::CliResult;

/// Hides a text message or a file in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier PNG image, used readonly
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File whose bytes will be hidden
    #[arg(short = 'd', long = "data", value_name = "data file")]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden, the first line is what unveil gives back
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn has_nothing_to_hide(&self) -> bool {
        self.message.is_none() && self.data_file.is_none()
    }

    pub fn run(self, scheme: Scheme) -> CliResult<()> {
        pngsteg_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.data_file,
            self.message,
            scheme,
        )
    }
}
