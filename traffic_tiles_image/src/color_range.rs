//! The fixed RGB ranges that identify traffic overlay colors.

use traffic_tiles_core::TrafficCategory;

/// An inclusive box in RGB space that maps to one traffic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRange {
	pub category: TrafficCategory,
	pub lower: [u8; 3],
	pub upper: [u8; 3],
}

impl ColorRange {
	const fn new(category: TrafficCategory, lower: [u8; 3], upper: [u8; 3]) -> ColorRange {
		ColorRange { category, lower, upper }
	}

	/// Whether every channel of `rgb` lies within `lower..=upper`.
	#[must_use]
	pub fn contains(&self, rgb: [u8; 3]) -> bool {
		(0..3).all(|i| self.lower[i] <= rgb[i] && rgb[i] <= self.upper[i])
	}
}

/// Ranges in match order. `heavy` and `moderate` overlap; the earlier entry wins.
pub const TRAFFIC_COLOR_RANGES: [ColorRange; 3] = [
	ColorRange::new(TrafficCategory::Heavy, [180, 0, 0], [255, 100, 100]),
	ColorRange::new(TrafficCategory::Moderate, [200, 100, 0], [255, 180, 100]),
	ColorRange::new(TrafficCategory::Light, [0, 100, 0], [100, 255, 100]),
];

/// Category of the first range containing `rgb`, if any.
#[must_use]
pub fn classify_pixel(rgb: [u8; 3]) -> Option<TrafficCategory> {
	TRAFFIC_COLOR_RANGES
		.iter()
		.find(|range| range.contains(rgb))
		.map(|range| range.category)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use TrafficCategory::{Heavy, Light, Moderate};

	#[rstest]
	#[case([200, 0, 0], Some(Heavy))]
	#[case([180, 0, 0], Some(Heavy))]
	#[case([255, 100, 100], Some(Heavy))]
	#[case([220, 100, 50], Some(Heavy))]
	#[case([230, 150, 50], Some(Moderate))]
	#[case([255, 180, 100], Some(Moderate))]
	#[case([50, 200, 50], Some(Light))]
	#[case([0, 100, 0], Some(Light))]
	#[case([255, 0, 0], Some(Heavy))]
	#[case([179, 0, 0], None)]
	#[case([255, 101, 100], Some(Moderate))]
	#[case([255, 181, 100], None)]
	#[case([255, 101, 101], None)]
	#[case([255, 255, 255], None)]
	#[case([0, 0, 0], None)]
	#[case([101, 200, 50], None)]
	fn classifies(#[case] rgb: [u8; 3], #[case] expected: Option<TrafficCategory>) {
		assert_eq!(classify_pixel(rgb), expected);
	}

	#[test]
	fn table_order() {
		let categories: Vec<TrafficCategory> = TRAFFIC_COLOR_RANGES.iter().map(|r| r.category).collect();
		assert_eq!(categories, TrafficCategory::ALL);
	}

	#[test]
	fn bounds_are_inclusive() {
		let range = TRAFFIC_COLOR_RANGES[2];
		assert!(range.contains(range.lower));
		assert!(range.contains(range.upper));
		assert!(!range.contains([101, 255, 100]));
	}
}
