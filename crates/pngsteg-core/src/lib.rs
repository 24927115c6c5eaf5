//! # PngSteg Core API
//!
//! Hides a text message inside the color channels of a PNG image, one byte
//! per pixel, and reads it back. The byte layout is picked with a
//! [`Scheme`][scheme]:
//! - [`Scheme::Nibble`][scheme] the message nibbles replace red and green
//! - [`Scheme::PaletteNibble`][scheme] the nibbles go into the low bits of red and green, output is an indexed PNG
//! - [`Scheme::Spread`][scheme] 2 bits in each of red, green, blue and alpha
//! - [`Scheme::TruncatedNibble`][scheme] like `Nibble`, only the first 30 rows are written out
//!
//! There is no length marker, unveiling reads every pixel and the text is
//! recovered as the first line of the result.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use pngsteg_core::media::image::Scheme;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbaImage::from_pixel(16, 16, image::Rgba([200, 100, 50, 255]))
//!     .save(&carrier)
//!     .expect("Failed to create carrier image");
//!
//! pngsteg_core::api::hide::prepare()
//!     .with_message("Hello, World!\n")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message.png"))
//!     .using_scheme(Scheme::Spread)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! pngsteg_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-message.png"))
//!     .into_output_file(temp_dir.path().join("message.txt"))
//!     .using_scheme(Scheme::Spread)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! let message = std::fs::read_to_string(temp_dir.path().join("message.txt")).unwrap();
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! [scheme]: ./media/image/enum.Scheme.html

#![warn(clippy::redundant_else)]

pub mod message;
pub use message::*;

pub mod raw_message;
pub use raw_message::*;

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

use std::path::{Path, PathBuf};

use log::debug;

pub use crate::error::PngStegError;
pub use crate::media::image::{RgbGrid, RgbaGrid, Scheme};
pub use crate::media::{Media, Persist};
pub use crate::result::Result;

pub struct PngSteg;

impl PngSteg {
    pub fn encoder() -> PngStegEncoder {
        PngStegEncoder::default()
    }

    pub fn encoder_with_scheme(scheme: Scheme) -> PngStegEncoder {
        PngStegEncoder::with_scheme(scheme)
    }
}

#[derive(Debug, Default)]
pub struct PngStegEncoder {
    scheme: Scheme,
    target: Option<PathBuf>,
    carrier: Option<Media>,
    message: Message,
}

impl PngStegEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(scheme: Scheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    pub fn use_media(&mut self, input_file: impl AsRef<Path>) -> Result<&mut Self> {
        let path = input_file.as_ref();
        self.carrier = Some(Media::from_file(path)?);

        Ok(self)
    }

    pub fn use_carrier(&mut self, media: Media) -> &mut Self {
        self.carrier = Some(media);
        self
    }

    pub fn save_as(&mut self, output_file: impl AsRef<Path>) -> &mut Self {
        self.target = Some(output_file.as_ref().to_owned());
        self
    }

    pub fn add_message(&mut self, msg: &str) -> Result<&mut Self> {
        self.message.add_text(msg)?;

        Ok(self)
    }

    pub fn add_file<P: AsRef<Path> + ?Sized>(&mut self, input_file: &P) -> Result<&mut Self> {
        self.message.add_file(input_file)?;

        Ok(self)
    }

    pub fn hide_and_save(&mut self) -> Result<&mut Self> {
        let Some(media) = self.carrier.as_mut() else {
            return Err(PngStegError::CarrierNotSet);
        };
        let Some(target) = self.target.as_ref() else {
            return Err(PngStegError::TargetNotSet);
        };

        debug!(
            "hiding {} bytes into {target:?} using {:?}",
            self.message.len(),
            self.scheme
        );
        media
            .hide_data(&self.message.content, self.scheme)?
            .save_as(target)?;

        Ok(self)
    }
}

#[cfg(test)]
mod e2e_tests {
    use super::*;
    use crate::commands::{unveil, unveil_raw};
    use crate::test_utils::{prepare_5x5_image, save_carrier};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn should_fail_for_invalid_carrier_image_file() {
        let mut encoder = PngStegEncoder::new();
        let result = encoder.use_media("some_random_file.png");
        match result.err() {
            Some(PngStegError::InvalidImageMedia) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_fail_for_invalid_media_file() {
        let mut encoder = PngStegEncoder::new();
        let result = encoder.use_media("Cargo.toml");
        match result.err() {
            Some(PngStegError::UnsupportedMedia) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_fail_without_carrier_or_target() {
        assert!(matches!(
            PngStegEncoder::new().save_as("out.png").hide_and_save(),
            Err(PngStegError::CarrierNotSet)
        ));
        assert!(matches!(
            PngStegEncoder::new()
                .use_carrier(Media::from_image(prepare_5x5_image()))
                .hide_and_save(),
            Err(PngStegError::TargetNotSet)
        ));
    }

    #[test]
    fn should_hide_and_unveil_a_message_with_every_scheme() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = save_carrier(out_dir.path(), "carrier.png", 40, 40)?;

        for scheme in [
            Scheme::Nibble,
            Scheme::PaletteNibble,
            Scheme::Spread,
            Scheme::TruncatedNibble,
        ] {
            let secret = out_dir.path().join(format!("secret-{scheme:?}.png"));
            let text = out_dir.path().join(format!("secret-{scheme:?}.txt"));

            PngSteg::encoder_with_scheme(scheme)
                .use_media(&carrier)?
                .add_message("Hello World!\n")?
                .save_as(&secret)
                .hide_and_save()?;

            unveil(&secret, &text, scheme)?;

            assert_eq!(
                fs::read_to_string(&text)?,
                "Hello World!",
                "{scheme:?} did not unveil the message"
            );
        }

        Ok(())
    }

    #[test]
    fn should_raw_unveil_every_pixel() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = save_carrier(out_dir.path(), "carrier.png", 8, 4)?;
        let secret = out_dir.path().join("secret.png");
        let raw = out_dir.path().join("secret.bin");

        assert!(matches!(
            PngSteg::encoder()
                .use_media(&carrier)?
                .add_file("Cargo.toml")?
                .save_as(&secret)
                .hide_and_save(),
            Err(PngStegError::CapacityExceeded {
                available_pixels: 32,
                ..
            })
        ));
        assert!(!secret.exists(), "nothing should be written on capacity errors");

        PngSteg::encoder()
            .use_media(&carrier)?
            .add_message("0123456789")?
            .save_as(&secret)
            .hide_and_save()?;

        unveil_raw(&secret, &raw, Scheme::Nibble)?;

        let content = fs::read(&raw)?;
        assert_eq!(content.len(), 32);
        assert_eq!(&content[..10], b"0123456789");

        Ok(())
    }
}
