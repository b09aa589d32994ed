//! Core building blocks for fetching traffic tiles: geographic and tile coordinates,
//! tile sources and the on-disk tile cache.

pub mod cache;
pub mod io;
pub mod types;
pub use types::*;
