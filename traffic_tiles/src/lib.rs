//! Extracts traffic severity points from raster traffic tiles.
//!
//! [`TrafficAggregator`] walks all tiles covering a [`RegionConfig`], reads each one
//! through a tile reader (usually [`FetchConfig::open_reader`], an HTTP source behind an
//! on-disk cache), classifies its pixels and writes the collected points as JSON.

pub mod aggregate;
pub mod config;
pub mod output;

pub use aggregate::TrafficAggregator;
pub use config::{Config, FetchConfig, OutputConfig, RegionConfig};
pub use output::{read_traffic_json, write_traffic_json};
