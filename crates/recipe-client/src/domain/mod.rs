//! Domain Layer
//!
//! Errors and upload types. No HTTP here.

mod error;
mod upload;

pub use error::{ServiceError, ServiceResult};
pub use upload::{decode_image, DecodedImage};
