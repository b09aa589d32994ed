//! A read-through tile cache on the local file system.
//!
//! Every tile is stored as one file `tile_{z}_{x}_{y}.png` inside the cache directory,
//! holding exactly the bytes the inner reader returned. An existing file is served without
//! touching the inner reader. Entries never expire.
//!
//! New entries are written to `tile_{z}_{x}_{y}.png.tmp` first and renamed into place, so an
//! interrupted write never leaves a truncated entry behind.

use crate::{Blob, TileCoord, io::TileReaderTrait};
use anyhow::Result;
use async_trait::async_trait;
use std::{
	fmt::{self, Debug},
	fs::create_dir_all,
	path::{Path, PathBuf},
};
use traffic_tiles_derive::context;

/// Wraps a [`TileReaderTrait`] and caches every successfully read tile on disk.
pub struct TileCacheOnDisk<R: TileReaderTrait> {
	reader: R,
	path: PathBuf,
}

impl<R: TileReaderTrait> TileCacheOnDisk<R> {
	/// Creates the cache in directory `path`, creating the directory if needed.
	///
	/// # Errors
	/// Fails if the directory cannot be created.
	#[context("creating tile cache in {:?}", path)]
	pub fn new(reader: R, path: &Path) -> Result<TileCacheOnDisk<R>> {
		create_dir_all(path)?;
		Ok(TileCacheOnDisk {
			reader,
			path: path.to_path_buf(),
		})
	}

	/// File that holds the tile at `coord`.
	#[must_use]
	pub fn entry_path(&self, coord: &TileCoord) -> PathBuf {
		self.path.join(format!("{}.png", coord.cache_name()))
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	#[context("reading tile {coord:?} through cache {:?}", self.path)]
	async fn read_through(&self, coord: &TileCoord) -> Result<Blob> {
		let entry_path = self.entry_path(coord);

		if entry_path.is_file() {
			log::debug!("cache hit for {coord:?}");
			return Blob::load_from_file(&entry_path).await;
		}

		log::debug!("cache miss for {coord:?}, reading from {}", self.reader.get_name());
		let blob = self.reader.read_tile(coord).await?;
		let temp_path = entry_path.with_extension("png.tmp");
		blob.save_to_file(&temp_path).await?;
		tokio::fs::rename(&temp_path, &entry_path).await?;
		Ok(blob)
	}
}

#[async_trait]
impl<R: TileReaderTrait> TileReaderTrait for TileCacheOnDisk<R> {
	async fn read_tile(&self, coord: &TileCoord) -> Result<Blob> {
		self.read_through(coord).await
	}

	fn get_name(&self) -> &str {
		self.reader.get_name()
	}
}

impl<R: TileReaderTrait> Debug for TileCacheOnDisk<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TileCacheOnDisk")
			.field("path", &self.path)
			.field("reader", &self.reader)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::io::{MockTileReader, TileReader};
	use assert_fs::TempDir;

	fn coord() -> TileCoord {
		TileCoord::new(10, 594, 360).unwrap()
	}

	fn new_cache(dir: &TempDir) -> TileCacheOnDisk<MockTileReader> {
		let mut reader = MockTileReader::new();
		reader.insert(coord(), Blob::from(&[137, 80, 78, 71, 0, 255]));
		reader.fail(TileCoord::new(10, 593, 359).unwrap());
		TileCacheOnDisk::new(reader, &dir.path().join("tile_cache")).unwrap()
	}

	#[test]
	fn creates_directory_and_names_entries() {
		let dir = TempDir::new().unwrap();
		let cache = new_cache(&dir);
		assert!(cache.path().is_dir());
		assert_eq!(
			cache.entry_path(&coord()),
			dir.path().join("tile_cache").join("tile_10_594_360.png")
		);
	}

	#[tokio::test]
	async fn miss_then_hit() -> Result<()> {
		let dir = TempDir::new()?;
		let cache = new_cache(&dir);

		let first = cache.read_tile(&coord()).await?;
		assert_eq!(cache.reader.request_count(), 1);
		assert_eq!(std::fs::read(cache.entry_path(&coord()))?, first.as_slice());

		let second = cache.read_tile(&coord()).await?;
		assert_eq!(cache.reader.request_count(), 1);
		assert_eq!(first, second);
		Ok(())
	}

	#[tokio::test]
	async fn existing_file_is_served_as_is() -> Result<()> {
		let dir = TempDir::new()?;
		let cache = new_cache(&dir);
		std::fs::write(cache.entry_path(&coord()), b"stale")?;

		assert_eq!(cache.read_tile(&coord()).await?.as_slice(), b"stale");
		assert_eq!(cache.reader.request_count(), 0);
		Ok(())
	}

	#[tokio::test]
	async fn failed_read_writes_nothing() -> Result<()> {
		let dir = TempDir::new()?;
		let cache = new_cache(&dir);
		let failing = TileCoord::new(10, 593, 359)?;

		let err = cache.read_tile(&failing).await.unwrap_err();
		assert!(format!("{err:#}").contains("simulated failure"));
		assert!(!cache.entry_path(&failing).exists());

		// not cached, so the source is asked again
		assert!(cache.read_tile(&failing).await.is_err());
		assert_eq!(cache.reader.request_count(), 2);
		Ok(())
	}

	#[tokio::test]
	async fn wraps_boxed_reader() -> Result<()> {
		let dir = TempDir::new()?;
		let mut mock = MockTileReader::new();
		mock.insert(coord(), Blob::from("boxed"));
		let reader: TileReader = Box::new(mock);

		let cache = TileCacheOnDisk::new(reader, dir.path())?;
		assert_eq!(cache.get_name(), "mock");
		assert_eq!(cache.read_tile(&coord()).await?.as_slice(), b"boxed");
		assert_eq!(std::fs::read(cache.entry_path(&coord()))?, b"boxed");
		Ok(())
	}

	#[tokio::test]
	async fn miss_leaves_no_temp_file() -> Result<()> {
		let dir = TempDir::new()?;
		let cache = new_cache(&dir);
		cache.read_tile(&coord()).await?;

		let names: Vec<String> = std::fs::read_dir(cache.path())?
			.map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
			.collect::<std::io::Result<_>>()?;
		assert_eq!(names, vec!["tile_10_594_360.png".to_string()]);
		Ok(())
	}

	#[tokio::test]
	async fn leftover_temp_file_is_not_a_hit() -> Result<()> {
		let dir = TempDir::new()?;
		let cache = new_cache(&dir);
		let temp_path = cache.path().join("tile_10_594_360.png.tmp");
		std::fs::write(&temp_path, b"trunc")?;

		let blob = cache.read_tile(&coord()).await?;
		assert_eq!(blob.as_slice(), &[137, 80, 78, 71, 0, 255]);
		assert_eq!(cache.reader.request_count(), 1);
		assert_eq!(std::fs::read(cache.entry_path(&coord()))?, blob.as_slice());
		assert!(!temp_path.exists());
		Ok(())
	}
}
