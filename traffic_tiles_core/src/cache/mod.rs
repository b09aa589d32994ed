mod tile_cache_on_disk;
pub use tile_cache_on_disk::TileCacheOnDisk;
