use std::path::{Path, PathBuf};

use crate::{PngStegError, Scheme};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    scheme: Scheme,
) -> Result<(), PngStegError> {
    crate::api::hide::prepare()
        .using_scheme(scheme)
        .with_image(media)
        .with_output(write_to_file)
        .use_file(data_file)
        .use_message(message)
        .execute()
}
