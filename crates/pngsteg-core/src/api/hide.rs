use std::path::{Path, PathBuf};

use crate::{PngSteg, PngStegError, Scheme};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    scheme: Scheme,
}

impl HideApi {
    /// Use the given embedding scheme
    pub fn using_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Hide the raw bytes of this file, after the message if there is one
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), PngStegError> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(PngStegError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PngStegError::TargetNotSet);
        };

        let mut s = PngSteg::encoder_with_scheme(self.scheme);
        s.use_media(&image)?.save_as(&output);

        if let Some(message) = self.message {
            s.add_message(message.as_str())?;
        }

        if let Some(file) = self.file {
            s.add_file(&file)?;
        }

        s.hide_and_save()?;

        Ok(())
    }

    fn validate(&self) -> Result<(), PngStegError> {
        if self.message.is_none() && self.file.is_none() {
            return Err(PngStegError::MissingMessage);
        }

        Ok(())
    }
}
