use bevy::{
    math::{ivec2, uvec2, IVec2, UVec2},
    prelude::Resource,
};

use crate::prelude::BOARD_SIZE;

/// Offsets of the 8 cells surrounding a cell (orthogonal + diagonal).
const NEIGHBOUR_OFFSETS: [IVec2; 8] = [
    ivec2(-1, -1),
    ivec2(0, -1),
    ivec2(1, -1),
    ivec2(-1, 0),
    ivec2(1, 0),
    ivec2(-1, 1),
    ivec2(0, 1),
    ivec2(1, 1),
];

/// Square grid of cells evolving under Conway's rule.
///
/// Cells are addressed by `(x, y)` with `(0, 0)` in the top left corner. The grid has hard
/// edges: positions outside of it are treated as permanently dead.
///
/// Two buffers are kept so that a generation is always computed from an untouched snapshot of
/// the previous one.
#[derive(Resource, Clone, Debug)]
pub struct Grid {
    /// the amount of cells on each axis
    size: u32,
    /// liveness of every cell in the current generation
    current: Vec<bool>,
    /// scratch buffer the next generation is written into
    future: Vec<bool>,
    /// number of generations computed since the grid was created
    generation: u64,
}

impl Grid {
    pub fn new(size: u32) -> Self {
        let len = (size * size) as usize;
        Self {
            size,
            current: vec![false; len],
            future: vec![false; len],
            generation: 0,
        }
    }

    /// Creates a grid with the given cells alive. Coordinates outside the grid are ignored.
    pub fn with_alive(size: u32, alive: impl IntoIterator<Item = UVec2>) -> Self {
        let mut grid = Self::new(size);
        for coord in alive {
            grid.set_alive(coord, true);
        }
        grid
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn contains(&self, coord: UVec2) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    #[inline]
    fn cell_coord_to_idx(&self, cell_coord: UVec2) -> usize {
        (cell_coord.y * self.size + cell_coord.x) as usize
    }

    #[inline]
    fn idx_to_cell_coord(&self, idx: usize) -> UVec2 {
        uvec2(idx as u32 % self.size, idx as u32 / self.size)
    }

    /// Returns `false` for positions outside the grid.
    #[inline]
    pub fn is_alive(&self, coord: UVec2) -> bool {
        self.contains(coord) && self.current[self.cell_coord_to_idx(coord)]
    }

    /// Sets the liveness of a cell, returning its previous state, or `None` if `coord` is
    /// outside the grid.
    pub fn set_alive(&mut self, coord: UVec2, alive: bool) -> Option<bool> {
        if !self.contains(coord) {
            return None;
        }
        let idx = self.cell_coord_to_idx(coord);
        Some(std::mem::replace(&mut self.current[idx], alive))
    }

    /// Flips a cell and returns its new state, or `None` if `coord` is outside the grid.
    pub fn toggle(&mut self, coord: UVec2) -> Option<bool> {
        if !self.contains(coord) {
            return None;
        }
        let idx = self.cell_coord_to_idx(coord);
        self.current[idx] = !self.current[idx];
        Some(self.current[idx])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|alive| **alive).count()
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (UVec2, bool)> + '_ {
        self.current
            .iter()
            .enumerate()
            .map(|(idx, alive)| (self.idx_to_cell_coord(idx), *alive))
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    /// Sets every cell to a random state.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut fastrand::Rng::new());
    }

    pub fn randomize_with(&mut self, rng: &mut fastrand::Rng) {
        for alive in self.current.iter_mut() {
            *alive = rng.bool();
        }
    }

    /// Counts the live cells among the 8 positions around `coord`.
    ///
    /// Neighbours that fall outside the grid don't count; there is no wrapping.
    pub fn live_neighbours(&self, coord: UVec2) -> u8 {
        let origin = coord.as_ivec2();
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|offset| origin + *offset)
            .filter(|pos| pos.x >= 0 && pos.y >= 0)
            .filter(|pos| self.is_alive(pos.as_uvec2()))
            .count() as u8
    }

    /// Advances the grid by one generation.
    ///
    /// Returns whether anything was born or died. Cells that merely survive don't count as a
    /// change, so a still life reports `false`.
    pub fn step(&mut self) -> bool {
        let mut changed = false;

        for idx in 0..self.current.len() {
            let alive = self.current[idx];
            let neighbours = self.live_neighbours(self.idx_to_cell_coord(idx));

            self.future[idx] = match (alive, neighbours) {
                (true, 2 | 3) => true,
                (false, 3) => {
                    changed = true;
                    true
                }
                _ => {
                    changed |= alive;
                    false
                }
            };
        }

        std::mem::swap(&mut self.current, &mut self.future);
        self.generation += 1;
        changed
    }
}

// Only the visible state matters; the scratch buffer and generation counter are ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.current == other.current
    }
}

impl Eq for Grid {}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn alive_cells(grid: &Grid) -> Vec<UVec2> {
        grid.iter()
            .filter(|(_, alive)| *alive)
            .map(|(coord, _)| coord)
            .collect()
    }

    #[test]
    fn index_mapping_works() {
        let grid = Grid::new(8);
        assert_eq!(9, grid.cell_coord_to_idx(uvec2(1, 1)));
        assert_eq!(56, grid.cell_coord_to_idx(uvec2(0, 7)));
        assert_eq!(uvec2(7, 7), grid.idx_to_cell_coord(63));
        assert_eq!(uvec2(3, 2), grid.idx_to_cell_coord(19));
    }

    #[test]
    fn out_of_range_is_dead_and_untouchable() {
        let mut grid = Grid::new(4);
        assert!(!grid.is_alive(uvec2(4, 0)));
        assert_eq!(None, grid.toggle(uvec2(0, 4)));
        assert_eq!(None, grid.set_alive(uvec2(9, 9), true));
        assert_eq!(0, grid.population());
    }

    #[test]
    fn neighbours_are_clipped_at_edges() {
        let full = Grid::with_alive(3, (0..3).flat_map(|y| (0..3).map(move |x| uvec2(x, y))));
        // corners see 3, edges 5, the centre 8 and never itself
        assert_eq!(3, full.live_neighbours(uvec2(0, 0)));
        assert_eq!(3, full.live_neighbours(uvec2(2, 2)));
        assert_eq!(5, full.live_neighbours(uvec2(1, 0)));
        assert_eq!(5, full.live_neighbours(uvec2(0, 1)));
        assert_eq!(8, full.live_neighbours(uvec2(1, 1)));

        // no wrap-around from one edge to the opposite one
        let grid = Grid::with_alive(5, [uvec2(4, 0), uvec2(0, 4), uvec2(4, 4)]);
        assert_eq!(0, grid.live_neighbours(uvec2(0, 0)));
    }

    #[test]
    fn neighbour_count_never_exceeds_eight() {
        let mut grid = Grid::new(12);
        grid.randomize_with(&mut fastrand::Rng::with_seed(7));
        for (coord, _) in grid.iter() {
            assert!(grid.live_neighbours(coord) <= 8);
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = Grid::new(10);
        assert!(!grid.step());
        assert_eq!(0, grid.population());
        assert_eq!(1, grid.generation());
    }

    #[test]
    fn lonely_cell_dies() {
        let mut grid = Grid::with_alive(10, [uvec2(5, 5)]);
        assert!(grid.step());
        assert_eq!(0, grid.population());
    }

    #[test]
    fn blinker_oscillates() {
        let vertical = vec![uvec2(1, 0), uvec2(1, 1), uvec2(1, 2)];
        let horizontal = vec![uvec2(0, 1), uvec2(1, 1), uvec2(2, 1)];
        let mut grid = Grid::with_alive(20, vertical.clone());

        assert!(grid.step());
        assert_eq!(horizontal, alive_cells(&grid));
        assert!(grid.step());
        assert_eq!(vertical, alive_cells(&grid));
    }

    #[test]
    fn block_is_still() {
        let block = vec![uvec2(4, 4), uvec2(5, 4), uvec2(4, 5), uvec2(5, 5)];
        let mut grid = Grid::with_alive(10, block.clone());
        assert!(!grid.step());
        assert_eq!(block, alive_cells(&grid));
    }

    #[test]
    fn glider_moves() {
        let mut grid = Grid::with_alive(
            10,
            [uvec2(1, 0), uvec2(2, 1), uvec2(0, 2), uvec2(1, 2), uvec2(2, 2)],
        );
        for _ in 0..4 {
            assert!(grid.step());
        }
        assert_eq!(
            vec![uvec2(2, 1), uvec2(3, 2), uvec2(1, 3), uvec2(2, 3), uvec2(3, 3)],
            alive_cells(&grid)
        );
    }

    #[test]
    fn toggling_twice_restores() {
        let mut grid = Grid::new(5);
        assert_eq!(Some(true), grid.toggle(uvec2(2, 3)));
        assert_eq!(Some(false), grid.toggle(uvec2(2, 3)));
        assert_eq!(Grid::new(5), grid);
    }

    #[test]
    fn clear_and_seeded_randomize() {
        let mut a = Grid::new(16);
        let mut b = Grid::new(16);
        a.randomize_with(&mut fastrand::Rng::with_seed(42));
        b.randomize_with(&mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);

        a.clear();
        assert_eq!(0, a.population());
    }
}
