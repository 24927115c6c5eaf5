mod hide;
mod unveil;
mod unveil_raw;

pub use hide::hide;
pub use unveil::unveil;
pub use unveil_raw::unveil_raw;
