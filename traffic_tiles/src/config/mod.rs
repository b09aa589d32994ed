//! Run configuration.
//!
//! A run is described by three sections, each optional in the YAML file and filled with
//! built-in defaults when absent:
//! - [`RegionConfig`]: which area to process, at which zoom level, and its output name
//! - [`FetchConfig`]: where tiles come from and where they are cached
//! - [`OutputConfig`]: where the JSON result is written
//!
//! ```yaml
//! region:
//!   name: chisinau
//!   bbox: [28.73, 46.94, 28.92, 47.07]
//!   zoom: 10
//! fetch:
//!   cache_dir: tile_cache
//!   timeout_seconds: 30
//! output:
//!   dir: .
//! ```

mod fetch;
mod main;
mod output;
mod region;

pub use fetch::FetchConfig;
pub use main::Config;
pub use output::OutputConfig;
pub use region::RegionConfig;
