//! The JSON result file: an array of `{"lat", "lon", "traffic"}` objects, pretty-printed
//! with two-space indentation.

use anyhow::Result;
use std::{
	fs::File,
	io::{BufReader, BufWriter, Write},
	path::Path,
};
use traffic_tiles_core::TrafficPoint;
use traffic_tiles_derive::context;

/// Writes `points` to `path`, replacing any existing file.
#[context("writing {} traffic points to {path:?}", points.len())]
pub fn write_traffic_json(path: &Path, points: &[TrafficPoint]) -> Result<()> {
	let mut writer = BufWriter::new(File::create(path)?);
	serde_json::to_writer_pretty(&mut writer, points)?;
	writer.flush()?;
	Ok(())
}

/// Reads a file written by [`write_traffic_json`].
#[context("reading traffic points from {path:?}")]
pub fn read_traffic_json(path: &Path) -> Result<Vec<TrafficPoint>> {
	let reader = BufReader::new(File::open(path)?);
	Ok(serde_json::from_reader(reader)?)
}
