use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
	/// Directory receiving the JSON file, created if missing.
	pub dir: PathBuf,
}

impl Default for OutputConfig {
	fn default() -> Self {
		OutputConfig {
			dir: PathBuf::from("."),
		}
	}
}

impl OutputConfig {
	pub fn override_optional_dir(&mut self, dir: Option<PathBuf>) {
		if let Some(dir) = dir {
			self.dir = dir;
		}
	}
}
