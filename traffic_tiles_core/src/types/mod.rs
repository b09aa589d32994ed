//! Contains types like coordinates, bounding boxes (bboxes), blobs and traffic points.

mod blob;
pub use blob::*;

mod geo_bbox;
pub use geo_bbox::*;

mod tile_bbox;
pub use tile_bbox::*;

mod tile_coord;
pub use tile_coord::*;

mod traffic_point;
pub use traffic_point::*;
