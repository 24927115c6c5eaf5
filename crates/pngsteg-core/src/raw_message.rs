use std::io::Read;

use crate::result::Result;

/// Everything a decoder yields, the hidden message followed by carrier noise.
#[derive(Debug, Default)]
pub struct RawMessage {
    pub content: Vec<u8>,
}

impl RawMessage {
    pub fn of(dec: &mut dyn Read) -> Result<Self> {
        let mut content = Vec::new();
        dec.read_to_end(&mut content)?;

        Ok(Self { content })
    }

    pub fn from_bytes(content: Vec<u8>) -> Self {
        Self { content }
    }

    /// The bytes up to the first line break, read as Latin-1.
    ///
    /// There is no length marker in the carrier, so this is a guess at where
    /// the hidden text ends. It is right whenever the noise after the message
    /// happens to contain a `\n` or `\r` and the message itself does not.
    pub fn first_line(&self) -> String {
        self.content
            .iter()
            .take_while(|&&b| b != b'\n' && b != b'\r')
            .map(|&b| char::from(b))
            .collect()
    }
}
