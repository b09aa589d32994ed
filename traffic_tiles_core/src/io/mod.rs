mod tile_reader;
pub use tile_reader::*;

mod tile_reader_http;
pub use tile_reader_http::*;

#[cfg(any(test, feature = "test"))]
mod tile_reader_mock;
#[cfg(any(test, feature = "test"))]
pub use tile_reader_mock::*;
