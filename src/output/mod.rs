//! Output encoders (PPM, PNG).

mod png_encoder;
mod ppm_encoder;

pub use png_encoder::PngEncoder;
pub use ppm_encoder::{PpmEncoder, MAX_CHANNEL};
