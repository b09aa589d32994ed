use anyhow::Result;
use image::RgbImage;
use traffic_tiles_core::Blob;
use traffic_tiles_derive::context;

/// Decodes raw tile bytes into an 8-bit RGB image.
///
/// The format is guessed from the content (PNG or JPEG). Alpha is dropped and other
/// color types are converted.
#[context("decoding tile image ({} bytes)", blob.len())]
pub fn decode_tile(blob: &Blob) -> Result<RgbImage> {
	Ok(image::load_from_memory(blob.as_slice())?.to_rgb8())
}
