// state.rs - the simulation state: cell board, fade overlay, generation counter

use rand::Rng;
use thiserror::Error;

use crate::grid::{CellGrid, FadeGrid};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid needs at least one row and one column, got {rows}x{cols}")]
    ZeroSized { rows: usize, cols: usize },
}

/// One simulation session. Holds the alive/dead board, the fade trail left
/// behind by dying cells, how many steps have run, and whether the board has
/// stopped changing.
///
/// The fields only change together through the methods here, so the fade
/// overlay always has the same dimensions as the board and the stable flag
/// always refers to the current grid.
#[derive(Debug)]
pub struct SimulationState {
    grid: CellGrid,
    fade: FadeGrid,
    generation: u64,
    stable: bool,
}

impl SimulationState {
    /// Create an all-dead board. Zero rows or columns are rejected rather
    /// than producing a board that can never evolve.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroSized { rows, cols });
        }
        Ok(Self {
            grid: CellGrid::build(rows, cols, false),
            fade: FadeGrid::build(rows, cols, 0.0),
            generation: 0,
            stable: false,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn fade(&self) -> &FadeGrid {
        &self.fade
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stable(&self) -> bool {
        self.stable
    }

    pub fn alive_count(&self) -> usize {
        self.grid.cells().iter().filter(|&&cell| cell).count()
    }

    /// Reseed every cell independently: alive with probability `density`.
    /// Starts a fresh session, so fades, the generation counter and the
    /// stable flag are all reset.
    pub fn randomize(&mut self, density: f64) {
        let mut rng = rand::rng();
        for cell in self.grid.cells_mut() {
            *cell = rng.random::<f64>() < density;
        }
        self.reset_session();
    }

    /// Kill every cell and start a fresh session.
    pub fn clear(&mut self) {
        self.grid.cells_mut().fill(false);
        self.reset_session();
    }

    /// Set one cell directly, as the editing gesture does. Out-of-bounds
    /// coordinates are ignored. Only the cell changes: the fade at that spot,
    /// the generation counter and the stable flag all stay as they were.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        if let Some(cell) = self.grid.get_mut(row, col) {
            *cell = alive;
        }
    }

    fn reset_session(&mut self) {
        self.fade.cells_mut().fill(0.0);
        self.generation = 0;
        self.stable = false;
    }

    pub(crate) fn fade_mut(&mut self) -> &mut FadeGrid {
        &mut self.fade
    }

    /// Install the result of one transition step. The generation counter
    /// advances exactly when a new board is installed.
    pub(crate) fn install(&mut self, grid: CellGrid, fade: FadeGrid, stable: bool) {
        self.grid = grid;
        self.fade = fade;
        self.stable = stable;
        self.generation += 1;
    }
}
