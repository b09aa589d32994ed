//! Traffic severity categories and the points classified into them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic severity, ordered from most to least congested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficCategory {
	Heavy,
	Moderate,
	Light,
}

impl TrafficCategory {
	/// All categories in declaration order.
	pub const ALL: [TrafficCategory; 3] = [TrafficCategory::Heavy, TrafficCategory::Moderate, TrafficCategory::Light];

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			TrafficCategory::Heavy => "heavy",
			TrafficCategory::Moderate => "moderate",
			TrafficCategory::Light => "light",
		}
	}
}

impl fmt::Display for TrafficCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A geographic position with the traffic category of the pixel it came from.
///
/// Serialized as `{"lat": .., "lon": .., "traffic": "heavy"}`.
///
/// ```
/// use traffic_tiles_core::{TrafficCategory, TrafficPoint};
///
/// let point = TrafficPoint::new(47.01, 28.83, TrafficCategory::Moderate);
/// assert_eq!(point.category(), TrafficCategory::Moderate);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafficPoint {
	lat: f64,
	lon: f64,
	#[serde(rename = "traffic")]
	category: TrafficCategory,
}

impl TrafficPoint {
	#[must_use]
	pub fn new(lat: f64, lon: f64, category: TrafficCategory) -> TrafficPoint {
		TrafficPoint { lat, lon, category }
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.lat
	}

	#[must_use]
	pub fn lon(&self) -> f64 {
		self.lon
	}

	#[must_use]
	pub fn category(&self) -> TrafficCategory {
		self.category
	}
}

/// Number of points per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrafficSummary {
	pub heavy: usize,
	pub moderate: usize,
	pub light: usize,
}

impl TrafficSummary {
	#[must_use]
	pub fn from_points(points: &[TrafficPoint]) -> TrafficSummary {
		let mut summary = TrafficSummary::default();
		for point in points {
			match point.category {
				TrafficCategory::Heavy => summary.heavy += 1,
				TrafficCategory::Moderate => summary.moderate += 1,
				TrafficCategory::Light => summary.light += 1,
			}
		}
		summary
	}

	#[must_use]
	pub fn total(&self) -> usize {
		self.heavy + self.moderate + self.light
	}
}

impl fmt::Display for TrafficSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} points (heavy: {}, moderate: {}, light: {})",
			self.total(),
			self.heavy,
			self.moderate,
			self.light
		)
	}
}
