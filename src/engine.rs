// engine.rs - one-generation transition with row coroutines, plus repeat detection

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::config::{FADE_CUTOFF, FADE_DECAY, HISTORY_LEN};
use crate::grid::{CellGrid, FadeGrid};
use crate::state::SimulationState;

/// What one `step` call did, so the driver can decide whether to keep its
/// timer running.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new generation was computed and installed.
    Advanced,
    /// The board is stable; only the fade trails changed.
    Fading,
    /// Stable with no trails left. Nothing will change again.
    Settled,
}

/// Row coroutine: computes the next state and next fade for every cell of
/// one row against a read-only snapshot of the current board.
async fn process_row(
    row: usize,
    current: Arc<CellGrid>,
    fades: Vec<f32>,
) -> (usize, Vec<bool>, Vec<f32>) {
    let mut next_cells = vec![false; current.cols()];
    let mut next_fades = vec![0.0f32; current.cols()];

    for col in 0..current.cols() {
        let alive = current[(row, col)];
        let neighbors = current.count_alive_neighbors(row, col);

        let next_alive = match (alive, neighbors) {
            (true, 2) | (true, 3) => true,   // Survival
            (false, 3)            => true,   // Birth
            _                     => false,  // Death or stays dead
        };

        next_cells[col] = next_alive;
        next_fades[col] = if next_alive {
            // an alive cell never carries a trail
            0.0
        } else if alive {
            // just died: the trail starts at full strength
            1.0
        } else {
            decay_fade(fades[col])
        };

        tokio::task::yield_now().await;  // Cooperative yielding!
    }

    (row, next_cells, next_fades)
}

/// One decay tick for a trail. Geometric falloff with a snap to zero below
/// the cutoff so trails do not linger forever.
fn decay_fade(fade: f32) -> f32 {
    let fade = fade * FADE_DECAY;
    if fade < FADE_CUTOFF { 0.0 } else { fade }
}

/// Advances a `SimulationState` one generation at a time. The runtime runs
/// one cooperative task per row on the calling thread, so a step is still a
/// single synchronous call from the driver's point of view.
pub struct Engine {
    runtime: Runtime,
}

impl Engine {
    pub fn new() -> io::Result<Self> {
        let runtime = Builder::new_current_thread().build()?;
        Ok(Self { runtime })
    }

    /// Advance by one generation.
    ///
    /// Once the board has reached a fixed point the cell grid and the
    /// generation counter are left alone; only the remaining trails keep
    /// decaying, and `Settled` reports when even those are gone.
    pub fn step(&self, sim: &mut SimulationState) -> StepOutcome {
        if sim.is_stable() {
            let mut fading = false;
            for fade in sim.fade_mut().cells_mut() {
                if *fade > 0.0 {
                    fading = true;
                    *fade = decay_fade(*fade);
                }
            }
            return if fading {
                StepOutcome::Fading
            } else {
                StepOutcome::Settled
            };
        }

        let rows = sim.rows();
        let cols = sim.cols();
        let snapshot = Arc::new(sim.grid().clone());
        let fade_rows: Vec<Vec<f32>> = (0..rows).map(|row| sim.fade().row(row).to_vec()).collect();

        let mut next = CellGrid::build(rows, cols, false);
        let mut fades = FadeGrid::build(rows, cols, 0.0);

        self.runtime.block_on(async {
            // Spawn all row coroutines at once so they time-slice the step
            let mut handles = Vec::new();
            for (row, row_fades) in fade_rows.into_iter().enumerate() {
                handles.push(tokio::spawn(process_row(row, Arc::clone(&snapshot), row_fades)));
            }

            for handle in handles {
                let (row, cells, row_fades) = handle.await.unwrap();
                next.row_mut(row).copy_from_slice(&cells);
                fades.row_mut(row).copy_from_slice(&row_fades);
            }
        });

        // Fixed point: the successor is cell-for-cell identical. This also
        // traps a board that has died out entirely.
        let stable = next == *sim.grid();
        sim.install(next, fades, stable);
        if stable {
            log::info!("board reached a fixed point at generation {}", sim.generation());
        }

        StepOutcome::Advanced
    }
}

/// Remembers a short window of recent board hashes so the driver can stop
/// playback on patterns the fixed-point check never catches (oscillators,
/// gliders bouncing in a loop).
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    seen: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self {
            history: [0; HISTORY_LEN],
            seen: 0,
        }
    }

    pub fn reset(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.seen = 0;
    }

    /// Record the board; true when it matches one of the previously seen
    /// boards still in the window.
    pub fn observe(&mut self, grid: &CellGrid) -> bool {
        let hash = hash_grid(grid);
        let filled = self.seen.min(HISTORY_LEN);
        if self.history[..filled].contains(&hash) {
            return true;
        }
        self.history[self.seen % HISTORY_LEN] = hash;
        self.seen += 1;
        false
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_grid(grid: &CellGrid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.cells().hash(&mut hasher);
    hasher.finish()
}
