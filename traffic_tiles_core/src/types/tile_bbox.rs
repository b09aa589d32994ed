//! Tile-aligned bounding boxes for a single zoom level.
//!
//! A `TileBBox` describes a rectangular block of Web Mercator tiles at zoom level `z`.
//! Coordinates are zero-based and inclusive on the maximum side; internally the box
//! stores `(x_min, y_min, width, height)`.
//!
//! Create the tiles covering a geographic region:
//! ```
//! # use traffic_tiles_core::{GeoBBox, TileBBox};
//! let region = GeoBBox::new(28.73, 46.94, 28.92, 47.07).unwrap();
//! let bbox = TileBBox::from_geo(10, &region).unwrap();
//! assert_eq!((bbox.x_min(), bbox.y_min(), bbox.x_max(), bbox.y_max()), (593, 359, 594, 360));
//! assert_eq!(bbox.count_tiles(), 4);
//! ```

use crate::{GeoBBox, TileCoord};
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::fmt;
use traffic_tiles_derive::context;

/// Degrees by which a region is shrunk before converting its edges to tiles, so an edge
/// lying exactly on a tile border does not pull in the neighbouring row or column.
const EDGE_EPSILON: f64 = 1e-10;

/// A rectangular region of tiles at a specific zoom level.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct TileBBox {
	/// Zoom level of the bounding box.
	pub level: u8,
	x_min: u32,
	y_min: u32,
	width: u32,
	height: u32,
}

impl TileBBox {
	/// Create from inclusive minimum and maximum tile indices.
	///
	/// # Errors
	/// Returns an error if `level > 31`, if a maximum is smaller than its minimum, or if a
	/// maximum lies outside the level.
	#[context("Failed to create TileBBox from min ({x_min}, {y_min}) and max ({x_max}, {y_max}) at level {level}")]
	pub fn from_min_and_max(level: u8, x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Result<TileBBox> {
		ensure!(level <= 31, "level ({level}) must be <= 31");

		let max = (1u32 << level) - 1;
		ensure!(x_min <= x_max, "x_min ({x_min}) must be <= x_max ({x_max})");
		ensure!(y_min <= y_max, "y_min ({y_min}) must be <= y_max ({y_max})");
		ensure!(x_max <= max, "x_max ({x_max}) must be <= {max}");
		ensure!(y_max <= max, "y_max ({y_max}) must be <= {max}");

		Ok(TileBBox {
			level,
			x_min,
			y_min,
			width: x_max - x_min + 1,
			height: y_max - y_min + 1,
		})
	}

	/// All tiles at `level` intersecting the geographic region `bbox`.
	///
	/// The region is first clamped to the Web Mercator latitude range. Edges falling exactly
	/// on a tile boundary do not include the tile on the far side, and a degenerate region
	/// still covers the one tile containing it.
	#[context("Failed to create TileBBox from {bbox:?} at level {level}")]
	pub fn from_geo(level: u8, bbox: &GeoBBox) -> Result<TileBBox> {
		ensure!(level <= 31, "level ({level}) must be <= 31");

		let bbox = bbox.limited_to_mercator();
		let (west, east) = shrink(bbox.west, bbox.east);
		let (south, north) = shrink(bbox.south, bbox.north);

		let p_min = TileCoord::from_geo(west, north, level)?;
		let p_max = TileCoord::from_geo(east, south, level)?;

		TileBBox::from_min_and_max(level, p_min.x, p_min.y, p_max.x, p_max.y)
	}

	#[must_use]
	pub fn width(&self) -> u32 {
		self.width
	}

	#[must_use]
	pub fn height(&self) -> u32 {
		self.height
	}

	#[must_use]
	pub fn x_min(&self) -> u32 {
		self.x_min
	}

	#[must_use]
	pub fn y_min(&self) -> u32 {
		self.y_min
	}

	#[must_use]
	pub fn x_max(&self) -> u32 {
		self.x_min + self.width - 1
	}

	#[must_use]
	pub fn y_max(&self) -> u32 {
		self.y_min + self.height - 1
	}

	/// Number of tiles in the box.
	#[must_use]
	pub fn count_tiles(&self) -> u64 {
		u64::from(self.width) * u64::from(self.height)
	}

	/// Iterates over all tiles column by column: x ascending, and within each column y
	/// ascending (north to south).
	pub fn iter_coords(&self) -> impl Iterator<Item = TileCoord> + '_ {
		(self.x_min()..=self.x_max())
			.cartesian_product(self.y_min()..=self.y_max())
			.map(|(x, y)| TileCoord { level: self.level, x, y })
	}
}

/// Moves both ends of `[min, max]` inwards by `EDGE_EPSILON`, collapsing to the midpoint
/// when the interval is narrower than that.
fn shrink(min: f64, max: f64) -> (f64, f64) {
	if max - min > 2.0 * EDGE_EPSILON {
		(min + EDGE_EPSILON, max - EDGE_EPSILON)
	} else {
		let mid = f64::midpoint(min, max);
		(mid, mid)
	}
}

impl fmt::Debug for TileBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: [{},{},{},{}] ({})",
			self.level,
			self.x_min(),
			self.y_min(),
			self.x_max(),
			self.y_max(),
			self.count_tiles()
		)
	}
}
