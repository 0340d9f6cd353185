// grid.rs - rectangular board storage for the cell matrix and the fade matrix

use std::ops::{Index, IndexMut};

/// Row-major matrix with dimensions fixed at construction. The same storage
/// backs the alive/dead board and the fade-intensity overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

pub type CellGrid = Grid<bool>;
pub type FadeGrid = Grid<f32>;

impl<T: Clone> Grid<T> {
    /// Build a `rows` x `cols` grid with every cell set to `fill`.
    pub fn build(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked access; `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl Grid<bool> {
    /// Count alive cells among the 8 surrounding positions. Positions outside
    /// the board count as dead; the board does not wrap around.
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r >= 0
                    && r < self.rows as isize
                    && c >= 0
                    && c < self.cols as isize
                    && self.cells[r as usize * self.cols + c as usize]
                {
                    count += 1;
                }
            }
        }
        count
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.cells[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fills_every_cell() {
        let grid = CellGrid::build(4, 7, true);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.cells().len(), 28);
        assert!(grid.cells().iter().all(|&cell| cell));

        let fades = FadeGrid::build(4, 7, 0.0);
        assert!(fades.cells().iter().all(|&fade| fade == 0.0));
    }

    #[test]
    fn get_is_none_outside_the_board() {
        let grid = CellGrid::build(3, 3, false);
        assert!(grid.get(0, 0).is_some());
        assert!(grid.get(2, 2).is_some());
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn neighbor_count_on_a_full_board() {
        let grid = CellGrid::build(3, 3, true);
        // center sees all 8, edges and corners only what exists
        assert_eq!(grid.count_alive_neighbors(1, 1), 8);
        assert_eq!(grid.count_alive_neighbors(0, 1), 5);
        assert_eq!(grid.count_alive_neighbors(0, 0), 3);
        assert_eq!(grid.count_alive_neighbors(2, 2), 3);
    }

    #[test]
    fn neighbor_count_ignores_positions_off_the_edge() {
        // a single alive cell in the corner; its diagonal neighbor sees it,
        // cells across the border do not wrap around to see anything
        let mut grid = CellGrid::build(3, 3, false);
        grid[(0, 0)] = true;
        assert_eq!(grid.count_alive_neighbors(1, 1), 1);
        assert_eq!(grid.count_alive_neighbors(2, 2), 0);
        assert_eq!(grid.count_alive_neighbors(0, 2), 0);
        assert_eq!(grid.count_alive_neighbors(2, 0), 0);
    }

    #[test]
    fn neighbor_count_never_exceeds_eight() {
        let grid = CellGrid::build(5, 5, true);
        for row in 0..5 {
            for col in 0..5 {
                assert!(grid.count_alive_neighbors(row, col) <= 8);
            }
        }
    }

    #[test]
    fn rows_slice_matches_indexing() {
        let mut grid = CellGrid::build(2, 3, false);
        grid[(1, 2)] = true;
        assert_eq!(grid.row(0), &[false, false, false]);
        assert_eq!(grid.row(1), &[false, false, true]);
    }

    #[test]
    fn equal_grids_compare_equal() {
        let mut a = CellGrid::build(2, 2, false);
        let mut b = CellGrid::build(2, 2, false);
        assert_eq!(a, b);
        a[(0, 1)] = true;
        assert_ne!(a, b);
        b[(0, 1)] = true;
        assert_eq!(a, b);
    }
}
