//! Image decode/encode collaborators.

use std::path::Path;

use image::{ImageReader, RgbImage};

/// Failure to read or decode a source radiograph.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Failure to encode or write an output image.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Decode an image file into an RGB buffer.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<RgbImage, DecodeError> {
    Ok(ImageReader::open(path)?.decode()?.to_rgb8())
}

/// Encode an RGB buffer; the format follows the file extension.
pub fn save_rgb(image: &RgbImage, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    image.save(path)?;
    Ok(())
}
