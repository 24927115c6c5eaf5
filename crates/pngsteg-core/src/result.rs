use crate::error::PngStegError;

pub type Result<E> = std::result::Result<E, PngStegError>;
