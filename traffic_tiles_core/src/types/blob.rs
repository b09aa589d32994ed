//! The [`Blob`] struct, an owned byte buffer holding raw tile bytes as they came from
//! the tile server or the on-disk cache.
//!
//! # Examples
//!
//! ```rust
//! use traffic_tiles_core::Blob;
//!
//! let blob = Blob::from(vec![137, 80, 78, 71]);
//! assert_eq!(blob.len(), 4);
//! assert_eq!(blob.as_slice(), &[137, 80, 78, 71]);
//! ```

use anyhow::Result;
use std::{fmt::Debug, path::Path};
use traffic_tiles_derive::context;

/// Raw bytes of a single tile image.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Returns a reference to the underlying byte slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Number of bytes.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Writes the bytes to `path`, replacing any existing file.
	#[context("saving {} bytes to {path:?}", self.len())]
	pub async fn save_to_file(&self, path: &Path) -> Result<()> {
		tokio::fs::write(path, &self.0).await?;
		Ok(())
	}

	/// Reads the complete file at `path`.
	#[context("loading blob from {path:?}")]
	pub async fn load_from_file(path: &Path) -> Result<Blob> {
		Ok(Blob::from(tokio::fs::read(path).await?))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(item: &str) -> Self {
		Blob(item.as_bytes().to_vec())
	}
}

/// Tile bytes are rarely readable, so only the length is printed.
impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({} bytes)", self.0.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversions() {
		assert_eq!(Blob::from("abc").as_slice(), b"abc");
		assert_eq!(Blob::from(&[1u8, 2, 3]).as_slice(), &[1, 2, 3]);
		assert_eq!(Blob::from(&b"xy"[..]).len(), 2);
		assert!(Blob::default().is_empty());
	}

	#[test]
	fn debug_prints_length_only() {
		assert_eq!(format!("{:?}", Blob::from(vec![0u8; 17])), "Blob(17 bytes)");
	}

	#[tokio::test]
	async fn save_and_load() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("tile.png");

		let blob = Blob::from(vec![9u8, 8, 7, 6]);
		blob.save_to_file(&path).await?;
		assert_eq!(Blob::load_from_file(&path).await?, blob);

		Ok(())
	}

	#[tokio::test]
	async fn load_missing_file_has_context() {
		let err = Blob::load_from_file(Path::new("/does/not/exist.png")).await.unwrap_err();
		assert!(format!("{err:#}").starts_with("loading blob from \"/does/not/exist.png\""));
	}
}
