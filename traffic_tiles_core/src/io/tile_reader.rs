//! The [`TileReaderTrait`] abstracts over everything that can deliver the raw bytes of a
//! tile: the HTTP tile server, the on-disk cache wrapping it, and mocks in tests.
//!
//! ```rust
//! use traffic_tiles_core::{Blob, TileCoord, io::{TileReader, TileReaderTrait}};
//! use anyhow::Result;
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct ConstantReader;
//!
//! #[async_trait]
//! impl TileReaderTrait for ConstantReader {
//!     async fn read_tile(&self, _coord: &TileCoord) -> Result<Blob> {
//!         Ok(Blob::from("not really a png"))
//!     }
//!
//!     fn get_name(&self) -> &str {
//!         "constant"
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let reader: TileReader = Box::new(ConstantReader);
//!     let blob = reader.read_tile(&TileCoord::new(3, 1, 2)?).await?;
//!     assert_eq!(blob.len(), 16);
//!     Ok(())
//! }
//! ```

use crate::{Blob, TileCoord};
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// Type alias for a boxed dynamic implementation of the `TileReaderTrait`.
pub type TileReader = Box<dyn TileReaderTrait>;

/// A source of raw tile bytes addressed by [`TileCoord`].
#[async_trait]
pub trait TileReaderTrait: Debug + Send + Sync {
	/// Returns the undecoded bytes of the tile at `coord`.
	async fn read_tile(&self, coord: &TileCoord) -> Result<Blob>;

	/// Name of the source, used in log messages.
	fn get_name(&self) -> &str;
}

#[async_trait]
impl TileReaderTrait for TileReader {
	async fn read_tile(&self, coord: &TileCoord) -> Result<Blob> {
		self.as_ref().read_tile(coord).await
	}

	fn get_name(&self) -> &str {
		self.as_ref().get_name()
	}
}
