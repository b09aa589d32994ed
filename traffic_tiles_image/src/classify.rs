//! Turning a decoded tile into traffic points.

use crate::classify_pixel;
use anyhow::{Result, ensure};
use image::RgbImage;
use traffic_tiles_core::{TileCoord, TrafficPoint};
use traffic_tiles_derive::context;

/// Scans every pixel of `image` row by row and emits a [`TrafficPoint`] for each pixel
/// whose color matches one of the traffic ranges.
///
/// `image` is the decoded tile at `coord`; its height is used as the tile size, so the
/// image has to be square.
#[context("extracting traffic from tile {coord:?}")]
pub fn extract_traffic(image: &RgbImage, coord: &TileCoord) -> Result<Vec<TrafficPoint>> {
	let (width, height) = image.dimensions();
	ensure!(width == height, "tile image must be square, got {width}x{height}");

	let points: Vec<TrafficPoint> = image
		.enumerate_pixels()
		.filter_map(|(px, py, pixel)| {
			let category = classify_pixel(pixel.0)?;
			let [lon, lat] = coord.pixel_to_geo(f64::from(px), f64::from(py), height);
			Some(TrafficPoint::new(lat, lon, category))
		})
		.collect();

	log::trace!("{coord:?}: {} traffic pixels", points.len());
	Ok(points)
}
