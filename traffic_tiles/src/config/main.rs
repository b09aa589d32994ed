use super::{FetchConfig, OutputConfig, RegionConfig};
use anyhow::Result;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};
use traffic_tiles_derive::context;

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Area, zoom level and name of the run
	#[serde(default)]
	pub region: RegionConfig,

	/// Tile source and cache
	#[serde(default)]
	pub fetch: FetchConfig,

	/// Destination of the JSON result
	#[serde(default)]
	pub output: OutputConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Reads a YAML file. Relative directories inside are used as given, i.e. relative to
	/// the working directory.
	#[context("reading config file {path:?}")]
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path)?;
		Config::from_reader(BufReader::new(file))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::path::PathBuf;
	use traffic_tiles_core::GeoBBox;

	#[test]
	fn parse_empty_config() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
	}

	#[test]
	fn parse_full_config() {
		let cfg = Config::from_string(
			"region:\n  name: berlin\n  bbox: [13.08, 52.33, 13.77, 52.68]\n  zoom: 12\nfetch:\n  url: https://tiles.example.org/{z}/{x}/{y}.png\n  cache_dir: /tmp/tiles\n  timeout_seconds: 5\noutput:\n  dir: results\n",
		)
		.unwrap();

		assert_eq!(
			cfg,
			Config {
				region: RegionConfig {
					name: "berlin".to_string(),
					bbox: GeoBBox::new(13.08, 52.33, 13.77, 52.68).unwrap(),
					zoom: 12,
				},
				fetch: FetchConfig {
					url: "https://tiles.example.org/{z}/{x}/{y}.png".to_string(),
					cache_dir: PathBuf::from("/tmp/tiles"),
					timeout_seconds: Some(5),
				},
				output: OutputConfig {
					dir: PathBuf::from("results"),
				},
			}
		);
	}

	#[test]
	fn partial_sections_keep_defaults() {
		let cfg = Config::from_string("region:\n  zoom: 11\n").unwrap();
		assert_eq!(cfg.region.zoom, 11);
		assert_eq!(cfg.region.name, "chisinau");
		assert_eq!(cfg.fetch, FetchConfig::default());
	}

	#[test]
	fn parse_invalid_config() {
		assert!(Config::from_string("regio:\n  zoom: 3\n").is_err());
		assert!(Config::from_string("region:\n  pi: 3.14\n").is_err());
		assert!(Config::from_string("region:\n  bbox: [10, 0, 5, 1]\n").is_err());
		assert!(Config::from_string("region:\n  zoom: 300\n").is_err());
	}

	#[test]
	fn from_path() {
		let dir = assert_fs::TempDir::new().unwrap();
		let path = dir.path().join("traffic.yml");
		std::fs::write(&path, "output:\n  dir: out\n").unwrap();

		let cfg = Config::from_path(&path).unwrap();
		assert_eq!(cfg.output.dir, PathBuf::from("out"));

		let err = Config::from_path(&dir.path().join("missing.yml")).unwrap_err();
		assert!(format!("{err:#}").starts_with("reading config file"));
	}
}
