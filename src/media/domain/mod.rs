//! Domain model for listing photos.

mod error;
mod image;

pub use error::MediaDomainError;
pub use image::{
    DEFAULT_MAX_IMAGE_BYTES, ImageFormat, ImageKey, ImageUpload, StoredImage, StoredObject,
};
