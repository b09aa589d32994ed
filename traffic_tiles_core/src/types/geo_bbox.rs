//! Geographic bounding boxes in WGS84 degrees.

use anyhow::{Result, ensure};
use serde::Deserialize;
use std::{fmt::Debug, str::FromStr};
use traffic_tiles_derive::context;

/// Largest latitude representable in Web Mercator.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;
const MAX_MERCATOR_LNG: f64 = 180.0;

/// A rectangular region defined by its `west`, `south`, `east` and `north` bounds in degrees.
///
/// Construction validates that the bounds are inside `[-180, 180] x [-90, 90]` and that
/// `west <= east` and `south <= north`. Deserializes from `[west, south, east, north]`
/// with the same validation.
///
/// # Examples
/// ```
/// use traffic_tiles_core::GeoBBox;
///
/// let chisinau = GeoBBox::new(28.73, 46.94, 28.92, 47.07).unwrap();
/// assert_eq!(chisinau.as_array(), [28.73, 46.94, 28.92, 47.07]);
///
/// let parsed: GeoBBox = "28.73,46.94,28.92,47.07".parse().unwrap();
/// assert_eq!(parsed, chisinau);
/// ```
#[derive(Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "[f64; 4]")]
pub struct GeoBBox {
	pub west: f64,
	pub south: f64,
	pub east: f64,
	pub north: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from `west, south, east, north`.
	#[must_use = "GeoBBox::new returns a Result; handle the error or unwrap"]
	pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<GeoBBox> {
		GeoBBox {
			west,
			south,
			east,
			north,
		}
		.checked()
	}

	/// Clamps the bounding box in place to the latitude/longitude limits of the
	/// Web Mercator projection (`±85.05112877980659°`, `±180°`).
	///
	/// ```
	/// use traffic_tiles_core::GeoBBox;
	///
	/// let mut bbox = GeoBBox::new(-180.0, -90.0, 180.0, 90.0).unwrap();
	/// bbox.limit_to_mercator();
	/// assert_eq!(bbox.as_array(), [-180.0, -85.05112877980659, 180.0, 85.05112877980659]);
	/// ```
	pub fn limit_to_mercator(&mut self) {
		self.west = self.west.clamp(-MAX_MERCATOR_LNG, MAX_MERCATOR_LNG);
		self.south = self.south.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
		self.east = self.east.clamp(-MAX_MERCATOR_LNG, MAX_MERCATOR_LNG);
		self.north = self.north.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
	}

	/// Returns a copy clamped to the Web Mercator limits.
	#[must_use]
	pub fn limited_to_mercator(mut self) -> GeoBBox {
		self.limit_to_mercator();
		self
	}

	/// Returns `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	fn checked(self) -> Result<Self> {
		ensure!(self.west >= -180., "west ({}) must be >= -180", self.west);
		ensure!(self.south >= -90., "south ({}) must be >= -90", self.south);
		ensure!(self.east <= 180., "east ({}) must be <= 180", self.east);
		ensure!(self.north <= 90., "north ({}) must be <= 90", self.north);
		ensure!(
			self.west <= self.east,
			"west ({}) must be <= east ({})",
			self.west,
			self.east
		);
		ensure!(
			self.south <= self.north,
			"south ({}) must be <= north ({})",
			self.south,
			self.north
		);
		Ok(self)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.west, self.south, self.east, self.north
		)
	}
}

impl TryFrom<Vec<f64>> for GeoBBox {
	type Error = anyhow::Error;

	/// Builds a `GeoBBox` from exactly four values `[west, south, east, north]`.
	#[context("Failed to convert {input:?} to GeoBBox")]
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"GeoBBox must have 4 elements (west, south, east, north)"
		);
		GeoBBox::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<[f64; 4]> for GeoBBox {
	type Error = anyhow::Error;

	fn try_from(input: [f64; 4]) -> Result<Self> {
		GeoBBox::new(input[0], input[1], input[2], input[3])
	}
}

/// Parses `"west,south,east,north"`; spaces and semicolons are accepted as separators too.
impl FromStr for GeoBBox {
	type Err = anyhow::Error;

	#[context("Failed to parse bounding box {text:?}")]
	fn from_str(text: &str) -> Result<Self> {
		let values = text
			.split(&[' ', ',', ';'])
			.filter(|s| !s.is_empty())
			.map(|s| s.parse::<f64>().map_err(anyhow::Error::from))
			.collect::<Result<Vec<f64>>>()?;

		GeoBBox::try_from(values)
	}
}
