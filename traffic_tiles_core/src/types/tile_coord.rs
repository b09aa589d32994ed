//! Tile coordinates in the slippy-map (Web Mercator) tile pyramid.
//!
//! [`TileCoord`] addresses one tile by zoom level and x/y index, converts geographic
//! coordinates into tiles, and converts tile or pixel positions back to longitude/latitude.
//!
//! # Examples
//!
//! ```
//! use traffic_tiles_core::TileCoord;
//!
//! let coord = TileCoord::new(10, 593, 359).unwrap();
//!
//! // north-west corner of the tile
//! let [lon, lat] = coord.as_geo();
//!
//! // position of pixel (128, 128) in a 256 px tile
//! let [lon, lat] = coord.pixel_to_geo(128.0, 128.0, 256);
//! ```

use anyhow::{Result, ensure};
use std::{
	f64::consts::PI,
	fmt::{self, Debug},
};
use traffic_tiles_derive::context;

/// A tile in a Web Mercator tile pyramid, with zoom level, x, and y indices.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile, growing eastwards.
	pub x: u32,
	/// The y index of the tile, growing southwards.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// # Errors
	/// Returns an error if `level` > 31 or if `x`/`y` are outside `0..2^level`.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= 31, "level ({level}) must be <= 31");
		let max = 1u32 << level;
		ensure!(x < max, "x ({x}) out of bounds for level {level}");
		ensure!(y < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// Create the `TileCoord` containing a geographic position at zoom level `z`.
	///
	/// Positions on the outer edge of the world are clamped into the last tile.
	///
	/// ```
	/// use traffic_tiles_core::TileCoord;
	///
	/// let coord = TileCoord::from_geo(28.83, 47.01, 10).unwrap();
	/// assert_eq!((coord.x, coord.y), (594, 360));
	/// ```
	#[context("Failed to convert geo coordinates ({lon}, {lat}) at zoom {z} to TileCoord")]
	pub fn from_geo(lon: f64, lat: f64, z: u8) -> Result<TileCoord> {
		ensure!(z <= 31, "z ({z}) must be <= 31");
		ensure!((-180.0..=180.0).contains(&lon), "lon ({lon}) must be in [-180, 180]");
		ensure!((-90.0..=90.0).contains(&lat), "lat ({lat}) must be in [-90, 90]");

		let zoom = f64::from(1u32 << z);
		let x = zoom * (lon / 360.0 + 0.5);
		let y = zoom * (0.5 - 0.5 * (lat * PI / 360.0 + PI / 4.0).tan().ln() / PI);

		TileCoord::new(
			z,
			x.clamp(0.0, zoom - 1.0).floor() as u32,
			// the poles project to ±inf
			y.max(0.0).min(zoom - 1.0).floor() as u32,
		)
	}

	/// Convert a fractional tile position at `level` to `[longitude, latitude]` in degrees.
	///
	/// This is the inverse Web Mercator projection used for tile corners as well as
	/// for individual pixels: `x` and `y` may carry a fractional part.
	///
	/// ```
	/// use traffic_tiles_core::TileCoord;
	///
	/// let [lon, lat] = TileCoord::coord_to_geo(0, 0.0, 0.0);
	/// assert_eq!(lon, -180.0);
	/// assert_eq!(format!("{lat:.4}"), "85.0511");
	/// ```
	#[must_use]
	pub fn coord_to_geo(level: u8, x: f64, y: f64) -> [f64; 2] {
		let n = f64::from(level).exp2();
		let lon = x / n * 360.0 - 180.0;
		let lat = (PI * (1.0 - 2.0 * y / n)).sinh().atan().to_degrees();
		[lon, lat]
	}

	/// North-west corner of this tile as `[longitude, latitude]`.
	#[must_use]
	pub fn as_geo(&self) -> [f64; 2] {
		TileCoord::coord_to_geo(self.level, f64::from(self.x), f64::from(self.y))
	}

	/// Position of pixel (`px`, `py`) inside this tile as `[longitude, latitude]`.
	///
	/// `tile_size` is the tile's edge length in pixels. Pixel `(0, 0)` is the tile's
	/// north-west corner and `(tile_size, tile_size)` coincides with the north-west
	/// corner of the diagonal neighbour `(x + 1, y + 1)`.
	#[must_use]
	pub fn pixel_to_geo(&self, px: f64, py: f64, tile_size: u32) -> [f64; 2] {
		let size = f64::from(tile_size);
		TileCoord::coord_to_geo(
			self.level,
			f64::from(self.x) + px / size,
			f64::from(self.y) + py / size,
		)
	}

	/// Base name of the cache file for this tile, `tile_{z}_{x}_{y}`.
	#[must_use]
	pub fn cache_name(&self) -> String {
		format!("tile_{}_{}_{}", self.level, self.x, self.y)
	}
}

/// Formats as `TileCoord(z, [x, y])`.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}
