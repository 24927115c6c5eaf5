use std::path::Path;

use crate::{PngStegError, Scheme};

/// unveil all raw data, no content interpretation is happening.
/// Just a raw binary dump of one byte per pixel.
pub fn unveil_raw(
    secret_media: &Path,
    destination_file: &Path,
    scheme: Scheme,
) -> Result<(), PngStegError> {
    crate::api::unveil_raw::prepare()
        .using_scheme(scheme)
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}
