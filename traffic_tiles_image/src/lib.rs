//! Raster side of the traffic pipeline: decoding tile images and classifying their
//! pixels into traffic categories.

mod classify;
mod color_range;
mod decode;

pub use classify::extract_traffic;
pub use color_range::{ColorRange, TRAFFIC_COLOR_RANGES, classify_pixel};
pub use decode::decode_tile;
