//! Bitmask-driven frame selection with one hop of neighbor propagation
//!
//! A single placement or removal can only change the masks of the changed
//! cell and its 8 immediate neighbors. The resolver therefore recomputes the
//! initiating tile, then each connected neighbor exactly once, and stops.
//! Recursion depth is capped by [`Depth`], so no visited set is needed and
//! every call touches at most 9 tiles.

use crate::bitmask::calculate_mask;
use crate::table::BitmaskProvider;
use crate::AutotileError;
use log::{debug, warn};
use roomtile_core::{Coordinate, TileCategory, TileGrid};

/// How far a resolve call may spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    /// The call made right after a grid mutation; re-resolves connected neighbors
    #[default]
    Initiating,
    /// A neighbor update; never spreads further
    Propagated,
}

/// A frame variant written back onto a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileUpdate {
    pub position: Coordinate,
    pub mask: u8,
    pub old_variant: usize,
    pub new_variant: usize,
}

impl TileUpdate {
    pub fn changed(&self) -> bool {
        self.old_variant != self.new_variant
    }
}

/// A computed mask the category's table has no frame for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncompleteEntry {
    pub position: Coordinate,
    pub category: TileCategory,
    pub mask: u8,
}

/// Everything one resolve call did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Tiles whose frame was recomputed, in visit order
    pub updated: Vec<TileUpdate>,
    /// Tiles left stale because their table lacks the computed mask
    pub incomplete: Vec<IncompleteEntry>,
}

impl ResolveReport {
    /// Updates that actually changed a frame
    pub fn changed(&self) -> impl Iterator<Item = &TileUpdate> {
        self.updated.iter().filter(|u| u.changed())
    }

    pub fn update_at(&self, position: Coordinate) -> Option<&TileUpdate> {
        self.updated.iter().find(|u| u.position == position)
    }

    pub fn is_clean(&self) -> bool {
        self.incomplete.is_empty()
    }
}

/// Recomputes frame variants from neighbor masks
///
/// Holds only a reference to the tables; it carries no state between calls.
pub struct AutotileResolver<'a, P: BitmaskProvider + ?Sized> {
    tables: &'a P,
}

impl<'a, P: BitmaskProvider + ?Sized> AutotileResolver<'a, P> {
    pub fn new(tables: &'a P) -> Self {
        Self { tables }
    }

    /// Gated neighbor mask of the tile at `coord` against current grid contents
    pub fn compute_mask<G>(&self, grid: &G, coord: Coordinate) -> Result<u8, AutotileError>
    where
        G: TileGrid + ?Sized,
    {
        let tile = grid
            .get(coord)
            .ok_or(AutotileError::InvalidCoordinate(coord))?;
        Ok(connected_mask(grid, coord, tile.category))
    }

    /// Resolve the tile at `coord` and re-resolve its connected neighbors
    pub fn resolve<G>(&self, grid: &mut G, coord: Coordinate) -> Result<ResolveReport, AutotileError>
    where
        G: TileGrid + ?Sized,
    {
        self.resolve_with_depth(grid, coord, Depth::Initiating)
    }

    /// Resolve only the tile at `coord`
    pub fn resolve_only<G>(
        &self,
        grid: &mut G,
        coord: Coordinate,
    ) -> Result<ResolveReport, AutotileError>
    where
        G: TileGrid + ?Sized,
    {
        self.resolve_with_depth(grid, coord, Depth::Propagated)
    }

    pub fn resolve_with_depth<G>(
        &self,
        grid: &mut G,
        coord: Coordinate,
        depth: Depth,
    ) -> Result<ResolveReport, AutotileError>
    where
        G: TileGrid + ?Sized,
    {
        let mut report = ResolveReport::default();
        self.resolve_tile(grid, coord, depth, &mut report)?;
        Ok(report)
    }

    /// Re-resolve the occupied neighbors of a cell whose tile was just removed
    pub fn resolve_vacated<G>(
        &self,
        grid: &mut G,
        coord: Coordinate,
    ) -> Result<ResolveReport, AutotileError>
    where
        G: TileGrid + ?Sized,
    {
        if grid.is_occupied(coord) {
            return Err(AutotileError::InvalidCoordinate(coord));
        }

        let mut report = ResolveReport::default();
        for (_, neighbor) in coord.neighbors() {
            if grid.is_occupied(neighbor) {
                self.resolve_tile(grid, neighbor, Depth::Propagated, &mut report)?;
            }
        }
        Ok(report)
    }

    fn resolve_tile<G>(
        &self,
        grid: &mut G,
        coord: Coordinate,
        depth: Depth,
        report: &mut ResolveReport,
    ) -> Result<(), AutotileError>
    where
        G: TileGrid + ?Sized,
    {
        let tile = *grid
            .get(coord)
            .ok_or(AutotileError::InvalidCoordinate(coord))?;

        if !self.tables.has_table(tile.category) {
            return Ok(());
        }

        let mask = connected_mask(&*grid, coord, tile.category);

        let Some(new_variant) = self.tables.lookup(tile.category, mask) else {
            warn!(
                "No frame for mask {mask} in {} table; leaving tile at {coord} on frame {}",
                tile.category, tile.frame_variant
            );
            report.incomplete.push(IncompleteEntry {
                position: coord,
                category: tile.category,
                mask,
            });
            return Ok(());
        };

        if let Some(placed) = grid.get_mut(coord) {
            placed.frame_variant = new_variant;
        }
        debug!(
            "Resolved {} at {coord}: mask {mask:#010b}, frame {} -> {new_variant}",
            tile.category, tile.frame_variant
        );
        report.updated.push(TileUpdate {
            position: coord,
            mask,
            old_variant: tile.frame_variant,
            new_variant,
        });

        if depth == Depth::Initiating {
            let connected: Vec<Coordinate> = coord
                .neighbors()
                .map(|(_, n)| n)
                .filter(|&n| is_connected(&*grid, n, tile.category))
                .collect();
            for neighbor in connected {
                self.resolve_tile(grid, neighbor, Depth::Propagated, report)?;
            }
        }

        Ok(())
    }
}

fn is_connected<G>(grid: &G, coord: Coordinate, category: TileCategory) -> bool
where
    G: TileGrid + ?Sized,
{
    grid.get(coord)
        .is_some_and(|other| category.connects_to(other.category))
}

fn connected_mask<G>(grid: &G, coord: Coordinate, category: TileCategory) -> u8
where
    G: TileGrid + ?Sized,
{
    calculate_mask(coord, |n| is_connected(grid, n, category))
}
