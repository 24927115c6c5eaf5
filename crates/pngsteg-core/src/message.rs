use crate::error::PngStegError;
use crate::result::Result;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The bytes to hide, one byte per pixel.
///
/// Text is taken as Latin-1, every `char` has to fit into a single byte.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Message {
    pub content: Vec<u8>,
}

impl Message {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_bytes(content: Vec<u8>) -> Self {
        Self { content }
    }

    /// Creates a new message with the given text.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut m = Self::empty();
        m.add_text(text)?;

        Ok(m)
    }

    /// Creates a new message with the content of the given file, byte by byte.
    pub fn from_file<P: AsRef<Path> + ?Sized>(file: &P) -> Result<Self> {
        let mut m = Self::empty();
        m.add_file(file)?;

        Ok(m)
    }

    pub fn add_text(&mut self, text: &str) -> Result<&mut Self> {
        let bytes = text
            .chars()
            .map(|c| u8::try_from(c).map_err(|_| PngStegError::InvalidByteValue { value: c as u32 }))
            .collect::<Result<Vec<u8>>>()?;
        self.content.extend(bytes);

        Ok(self)
    }

    pub fn add_file<P: AsRef<Path> + ?Sized>(&mut self, file: &P) -> Result<&mut Self> {
        let mut fd = File::open(file).map_err(|source| PngStegError::ReadError { source })?;
        fd.read_to_end(&mut self.content)
            .map_err(|source| PngStegError::ReadError { source })?;

        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
