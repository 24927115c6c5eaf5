use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{media::Media, PngStegError, RawMessage, Scheme};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    scheme: Scheme,
}

impl UnveilApi {
    /// Use the given embedding scheme
    pub fn using_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the text file the message will be saved to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), PngStegError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PngStegError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(PngStegError::TargetNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let msg = RawMessage::from_bytes(media.unveil_data(self.scheme)?);
        let text = msg.first_line();
        debug!(
            "unveiled {} characters out of {} bytes",
            text.chars().count(),
            msg.content.len()
        );

        let mut target_file =
            File::create(output_file).map_err(|source| PngStegError::WriteError { source })?;

        target_file
            .write_all(text.as_bytes())
            .map_err(|source| PngStegError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use std::io::read_to_string;

    use tempfile::tempdir;

    use crate::test_utils::save_carrier;
    use crate::{PngStegError, Scheme};

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = save_carrier(temp_dir.path(), "carrier.png", 10, 10)
            .expect("Failed to create carrier image");
        let secret = temp_dir.path().join("secret.png");
        crate::api::hide::prepare()
            .with_message("Hello World\nthis line is not unveiled")
            .with_image(&carrier)
            .with_output(&secret)
            .using_scheme(Scheme::TruncatedNibble)
            .execute()
            .expect("Failed to hide message in image");

        crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .into_output_file(temp_dir.path().join("secret-message.txt"))
            .using_scheme(Scheme::TruncatedNibble)
            .execute()
            .expect("Failed to unveil message from image");

        let secret_message = read_to_string(
            std::fs::File::open(temp_dir.path().join("secret-message.txt"))
                .expect("Failed to open file"),
        )
        .expect("Failed to read file");
        assert_eq!(secret_message, "Hello World");
    }

    #[test]
    fn should_require_a_secret_and_an_output() {
        assert!(matches!(
            crate::api::unveil::prepare().execute(),
            Err(PngStegError::CarrierNotSet)
        ));
        assert!(matches!(
            crate::api::unveil::prepare()
                .from_secret_file("secret.png")
                .execute(),
            Err(PngStegError::TargetNotSet)
        ));
    }
}
