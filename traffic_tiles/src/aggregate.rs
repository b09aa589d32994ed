//! Collecting traffic points for a whole region.
//!
//! Tiles are processed one after another in column-major order (x ascending, then y
//! ascending). A tile that cannot be read, decoded or classified is logged and skipped;
//! the run continues with the next tile.

use crate::{RegionConfig, write_traffic_json};
use anyhow::Result;
use std::{
	fs::create_dir_all,
	path::{Path, PathBuf},
};
use traffic_tiles_core::{TileBBox, TileCoord, TrafficPoint, TrafficSummary, io::TileReaderTrait};
use traffic_tiles_derive::context;
use traffic_tiles_image::{decode_tile, extract_traffic};

/// Runs the tile pipeline for a region on top of a tile reader.
#[derive(Debug)]
pub struct TrafficAggregator<R: TileReaderTrait> {
	reader: R,
}

impl<R: TileReaderTrait> TrafficAggregator<R> {
	pub fn new(reader: R) -> TrafficAggregator<R> {
		TrafficAggregator { reader }
	}

	pub fn reader(&self) -> &R {
		&self.reader
	}

	/// Points of all tiles covering `region`, concatenated in tile order.
	///
	/// Fails only if the region itself is invalid; per-tile errors are logged and skipped.
	#[context("collecting traffic for region '{}'", region.name)]
	pub async fn collect(&self, region: &RegionConfig) -> Result<Vec<TrafficPoint>> {
		let bbox = TileBBox::from_geo(region.zoom, &region.bbox)?;
		log::info!(
			"processing {} tiles for '{}' from {}",
			bbox.count_tiles(),
			region.name,
			self.reader.get_name()
		);
		log::debug!("tile range {bbox:?}");

		let mut points = Vec::new();
		let mut failed = 0u64;
		for coord in bbox.iter_coords() {
			match self.process_tile(&coord).await {
				Ok(tile_points) => {
					log::debug!("{coord:?}: {} points", tile_points.len());
					points.extend(tile_points);
				}
				Err(err) => {
					failed += 1;
					log::warn!("skipping tile {coord:?}: {err:#}");
				}
			}
		}

		if failed > 0 {
			log::warn!("{failed} of {} tiles skipped", bbox.count_tiles());
		}
		Ok(points)
	}

	/// Collects `region` and writes the points to `{output_dir}/{name}_traffic_z{zoom}.json`.
	///
	/// Returns the path of the written file.
	#[context("writing traffic json for region '{}' to {output_dir:?}", region.name)]
	pub async fn generate_traffic_json(&self, region: &RegionConfig, output_dir: &Path) -> Result<PathBuf> {
		let points = self.collect(region).await?;

		create_dir_all(output_dir)?;
		let path = output_dir.join(region.output_file_name());
		write_traffic_json(&path, &points)?;

		log::info!("{}", TrafficSummary::from_points(&points));
		Ok(path)
	}

	async fn process_tile(&self, coord: &TileCoord) -> Result<Vec<TrafficPoint>> {
		let blob = self.reader.read_tile(coord).await?;
		let image = decode_tile(&blob)?;
		extract_traffic(&image, coord)
	}
}
