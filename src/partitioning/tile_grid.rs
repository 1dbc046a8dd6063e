//! A uniform tile grid used as a simple broad phase.

use crate::math::{Point2, Real, Vector2};
use crate::shape::Rect2;

use std::collections::HashMap;

/// A uniform grid of large square tiles partitioning a fixed world extent.
///
/// Tiles are meant to be oversized relative to the entities stored in them
/// (several times the size of the largest entity). Each tile records the ids
/// of the entities whose bounds intersect it, and each entity remembers the
/// tiles it occupies. Entities that do not share a tile cannot possibly
/// intersect, which is the entire broad-phase contract; there is no
/// eviction, rebalancing, or any other consistency protocol.
///
/// Tile coordinates are [`Point2`] values, `(0, 0)` being the tile covering
/// `[0, tile_size) x [0, tile_size)`.
pub struct TileGrid {
    tile_size: Real,
    tiles_x: u32,
    tiles_y: u32,
    tiles: Vec<Vec<u64>>,
    occupied: HashMap<u64, Vec<Point2>>,
}

impl TileGrid {
    /// Creates a grid of `tiles_x * tiles_y` square tiles with the given
    /// edge length, covering the world rectangle from the origin to
    /// `(tiles_x * tile_size, tiles_y * tile_size)`.
    ///
    /// # Panics
    /// Panics if `tile_size` is not strictly positive or if either dimension
    /// is zero.
    pub fn new(tile_size: Real, tiles_x: u32, tiles_y: u32) -> TileGrid {
        assert!(tile_size > 0.0, "tile_size must be strictly positive");
        assert!(tiles_x > 0 && tiles_y > 0, "the grid cannot be empty");

        TileGrid {
            tile_size,
            tiles_x,
            tiles_y,
            tiles: vec![Vec::new(); (tiles_x * tiles_y) as usize],
            occupied: HashMap::new(),
        }
    }

    /// The edge length of every tile.
    #[inline]
    pub fn tile_size(&self) -> Real {
        self.tile_size
    }

    /// The number of tiles along each axis, `(x, y)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.tiles_x, self.tiles_y)
    }

    fn tile_index(&self, tile: Point2) -> Option<usize> {
        if tile.x < 0 || tile.y < 0 || tile.x >= self.tiles_x as i32 || tile.y >= self.tiles_y as i32
        {
            None
        } else {
            Some(tile.y as usize * self.tiles_x as usize + tile.x as usize)
        }
    }

    /// The inclusive range of in-grid tiles covered by `bounds` at `pos`,
    /// or `None` when the bounds lie entirely outside the grid.
    fn tile_range(&self, bounds: &Rect2, pos: Vector2) -> Option<(Point2, Point2)> {
        let lo = (bounds.min() + pos) * (1.0 / self.tile_size);
        let hi = (bounds.max() + pos) * (1.0 / self.tile_size);

        let min = Point2::new(lo.x.floor() as i32, lo.y.floor() as i32);
        let max = Point2::new(hi.x.floor() as i32, hi.y.floor() as i32);

        if max.x < 0 || max.y < 0 || min.x >= self.tiles_x as i32 || min.y >= self.tiles_y as i32 {
            return None;
        }

        Some((
            Point2::new(min.x.max(0), min.y.max(0)),
            Point2::new(
                max.x.min(self.tiles_x as i32 - 1),
                max.y.min(self.tiles_y as i32 - 1),
            ),
        ))
    }

    fn covered_tiles(&self, bounds: &Rect2, pos: Vector2) -> Vec<Point2> {
        let mut covered = Vec::new();

        if let Some((min, max)) = self.tile_range(bounds, pos) {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    covered.push(Point2::new(x, y));
                }
            }
        }

        covered
    }

    /// Records the entity `id`, whose bounds are `bounds` placed at `pos`,
    /// in every tile its bounds intersect.
    ///
    /// An entity whose bounds lie entirely outside the grid occupies no
    /// tiles; it simply never shows up as a collision candidate.
    pub fn insert(&mut self, id: u64, bounds: &Rect2, pos: Vector2) {
        if self.occupied.contains_key(&id) {
            log::debug!("entity {id} inserted while already present, replacing it");
            self.remove(id);
        }

        let covered = self.covered_tiles(bounds, pos);

        for tile in &covered {
            if let Some(idx) = self.tile_index(*tile) {
                self.tiles[idx].push(id);
            }
        }

        let _ = self.occupied.insert(id, covered);
    }

    /// Removes the entity `id` from every tile it occupies.
    pub fn remove(&mut self, id: u64) {
        match self.occupied.remove(&id) {
            Some(covered) => {
                for tile in covered {
                    if let Some(idx) = self.tile_index(tile) {
                        self.tiles[idx].retain(|&other| other != id);
                    }
                }
            }
            None => log::debug!("removing unknown entity {id} from the tile grid"),
        }
    }

    /// Re-records the entity `id` at a new placement.
    pub fn update(&mut self, id: u64, bounds: &Rect2, pos: Vector2) {
        self.remove(id);
        self.insert(id, bounds, pos);
    }

    /// The tiles currently occupied by the entity `id`, or `None` if the
    /// entity is unknown.
    #[inline]
    pub fn tiles_of(&self, id: u64) -> Option<&[Point2]> {
        self.occupied.get(&id).map(|tiles| &tiles[..])
    }

    /// The ids of the entities occupying the given tile. Empty for
    /// out-of-grid coordinates.
    pub fn entities_in(&self, tile: Point2) -> &[u64] {
        match self.tile_index(tile) {
            Some(idx) => &self.tiles[idx],
            None => &[],
        }
    }

    /// The ids of every entity sharing a tile with `bounds` placed at `pos`,
    /// deduplicated and sorted.
    ///
    /// This is the broad-phase query: only the returned entities can
    /// possibly intersect the given bounds, and each candidate still has to
    /// be confirmed by a narrow-phase SAT test.
    pub fn candidates(&self, bounds: &Rect2, pos: Vector2) -> Vec<u64> {
        let mut found = Vec::new();

        for tile in self.covered_tiles(bounds, pos) {
            if let Some(idx) = self.tile_index(tile) {
                found.extend_from_slice(&self.tiles[idx]);
            }
        }

        found.sort_unstable();
        found.dedup();
        found
    }
}
