use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    media::{image::LsbCodec, Media},
    PngStegError, RawMessage, Scheme,
};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    scheme: Scheme,
}

impl UnveilRawApi {
    /// Use the given embedding scheme
    pub fn using_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), PngStegError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PngStegError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(PngStegError::TargetNotSet);
        };

        let grid = Media::from_file(&secret_media)?.to_pixel_grid();
        let mut decoder = LsbCodec::decoder(&grid, self.scheme)?;
        let msg = RawMessage::of(&mut decoder)?;

        let mut destination_file =
            File::create(destination_file).map_err(|source| PngStegError::WriteError { source })?;

        destination_file
            .write_all(msg.content.as_slice())
            .map_err(|source| PngStegError::WriteError { source })
    }
}
