use std::path::Path;

use crate::{PngStegError, Scheme};

pub fn unveil(
    secret_media: &Path,
    output_file: &Path,
    scheme: Scheme,
) -> Result<(), PngStegError> {
    crate::api::unveil::prepare()
        .using_scheme(scheme)
        .from_secret_file(secret_media)
        .into_output_file(output_file)
        .execute()
}
