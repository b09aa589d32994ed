use serde::Deserialize;
use traffic_tiles_core::GeoBBox;

/// The area to process.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct RegionConfig {
	/// Prefix of the output file name.
	pub name: String,

	/// `[west, south, east, north]` in degrees.
	pub bbox: GeoBBox,

	/// Tile zoom level.
	pub zoom: u8,
}

impl Default for RegionConfig {
	/// Central Chisinau at zoom level 10.
	fn default() -> Self {
		RegionConfig {
			name: "chisinau".to_string(),
			bbox: GeoBBox {
				west: 28.73,
				south: 46.94,
				east: 28.92,
				north: 47.07,
			},
			zoom: 10,
		}
	}
}

impl RegionConfig {
	pub fn override_optional_name(&mut self, name: Option<String>) {
		if let Some(name) = name {
			self.name = name;
		}
	}
	pub fn override_optional_bbox(&mut self, bbox: Option<GeoBBox>) {
		if let Some(bbox) = bbox {
			self.bbox = bbox;
		}
	}
	pub fn override_optional_zoom(&mut self, zoom: Option<u8>) {
		if let Some(zoom) = zoom {
			self.zoom = zoom;
		}
	}

	/// File name of the JSON result, `{name}_traffic_z{zoom}.json`.
	#[must_use]
	pub fn output_file_name(&self) -> String {
		format!("{}_traffic_z{}.json", self.name, self.zoom)
	}
}
