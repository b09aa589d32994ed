//! In-memory tile source for tests.

use super::TileReaderTrait;
use crate::{Blob, TileCoord};
use anyhow::{Result, bail};
use async_trait::async_trait;
use std::{
	collections::{HashMap, HashSet},
	sync::atomic::{AtomicUsize, Ordering},
};

/// Serves tiles from a map, fails for explicitly registered coordinates and reports
/// `not found` for everything else. Counts every request.
#[derive(Debug, Default)]
pub struct MockTileReader {
	tiles: HashMap<TileCoord, Blob>,
	failing: HashSet<TileCoord>,
	requests: AtomicUsize,
}

impl MockTileReader {
	#[must_use]
	pub fn new() -> MockTileReader {
		MockTileReader::default()
	}

	/// Serves `blob` for `coord`.
	pub fn insert(&mut self, coord: TileCoord, blob: Blob) {
		self.failing.remove(&coord);
		self.tiles.insert(coord, blob);
	}

	/// Makes every request for `coord` fail.
	pub fn fail(&mut self, coord: TileCoord) {
		self.tiles.remove(&coord);
		self.failing.insert(coord);
	}

	/// Number of `read_tile` calls so far, successful or not.
	pub fn request_count(&self) -> usize {
		self.requests.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl TileReaderTrait for MockTileReader {
	async fn read_tile(&self, coord: &TileCoord) -> Result<Blob> {
		self.requests.fetch_add(1, Ordering::SeqCst);
		if self.failing.contains(coord) {
			bail!("simulated failure for {coord:?}");
		}
		match self.tiles.get(coord) {
			Some(blob) => Ok(blob.clone()),
			None => bail!("tile {coord:?} not found"),
		}
	}

	fn get_name(&self) -> &str {
		"mock"
	}
}
