//! Spatial partitioning for broad-phase collision pruning.

pub use self::tile_grid::TileGrid;

mod tile_grid;
