use anyhow::Result;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};
use traffic_tiles_core::{
	cache::TileCacheOnDisk,
	io::{DEFAULT_TILE_URL, TileReaderHttp},
};

/// Where tiles come from and where they are kept.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct FetchConfig {
	/// Tile URL template with `{x}`, `{y}` and `{z}` placeholders.
	pub url: String,

	/// Directory for cached tiles, created if missing.
	pub cache_dir: PathBuf,

	/// Per-request timeout. Requests wait indefinitely when unset.
	pub timeout_seconds: Option<u64>,
}

impl Default for FetchConfig {
	fn default() -> Self {
		FetchConfig {
			url: DEFAULT_TILE_URL.to_string(),
			cache_dir: PathBuf::from("tile_cache"),
			timeout_seconds: None,
		}
	}
}

impl FetchConfig {
	pub fn override_optional_url(&mut self, url: Option<String>) {
		if let Some(url) = url {
			self.url = url;
		}
	}
	pub fn override_optional_cache_dir(&mut self, cache_dir: Option<PathBuf>) {
		if let Some(cache_dir) = cache_dir {
			self.cache_dir = cache_dir;
		}
	}
	pub fn override_optional_timeout_seconds(&mut self, timeout_seconds: Option<u64>) {
		if timeout_seconds.is_some() {
			self.timeout_seconds = timeout_seconds;
		}
	}

	#[must_use]
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_seconds.map(Duration::from_secs)
	}

	/// HTTP reader for `url`, behind the on-disk cache in `cache_dir`.
	pub fn open_reader(&self) -> Result<TileCacheOnDisk<TileReaderHttp>> {
		let http = TileReaderHttp::from_template(&self.url, self.timeout())?;
		TileCacheOnDisk::new(http, &self.cache_dir)
	}
}
