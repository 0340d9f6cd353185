// main.rs - Game of Life with heart sprites, fade trails and row coroutines

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};

mod config;
mod engine;
mod grid;
mod patterns;
mod sprite;
mod state;
mod ui;

use config::{CELL, DEFAULT_DENSITY, DEFAULT_INTERVAL_MS, GRID_COLS, GRID_ROWS};
use engine::{CycleDetector, Engine, StepOutcome};
use sprite::HeartSprite;
use state::SimulationState;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!("starting with a {}x{} board", GRID_ROWS, GRID_COLS);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 790.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Heart of Life",
        options,
        Box::new(|_cc| Box::new(HeartLife::default())),
    )
}

/// Top-level application state: one simulation session plus everything the
/// driver keeps between frames.
pub struct HeartLife {
    pub sim: SimulationState,
    pub engine: Engine,
    pub detector: CycleDetector,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub interval_ms: u64,
    pub stop_on_repeat: bool,
    pub selected_pattern: usize,

    pub alive_color: Color32,
    pub bg_color: Color32,

    pub paint_value: bool,
    pub sprite: HeartSprite,
}

impl Default for HeartLife {
    fn default() -> Self {
        let engine = Engine::new().expect("failed to build the step runtime");
        let mut sim =
            SimulationState::new(GRID_ROWS, GRID_COLS).expect("board dimensions are nonzero");
        sim.randomize(DEFAULT_DENSITY);

        let alive_color = Color32::from_rgb(230, 60, 90);

        Self {
            sim,
            engine,
            detector: CycleDetector::new(),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            interval_ms: DEFAULT_INTERVAL_MS,
            stop_on_repeat: false,
            selected_pattern: 0,
            alive_color,
            bg_color: Color32::from_rgb(15, 15, 20),
            paint_value: true,
            sprite: HeartSprite::new(CELL, alive_color),
        }
    }
}

impl HeartLife {
    /// One simulation step plus the bookkeeping that may stop playback:
    /// full settlement always stops it, a repeating board stops it when the
    /// repeat detector is switched on.
    pub fn advance(&mut self) {
        match self.engine.step(&mut self.sim) {
            StepOutcome::Settled => {
                if self.is_running {
                    log::info!("board fully settled, stopping playback");
                }
                self.is_running = false;
            }
            StepOutcome::Advanced => {
                // Once the fixed point is found the settle path takes over,
                // so the detector only watches boards that still change
                if self.stop_on_repeat
                    && !self.sim.is_stable()
                    && self.detector.observe(self.sim.grid())
                {
                    log::info!(
                        "board repeats itself at generation {}, stopping playback",
                        self.sim.generation()
                    );
                    self.is_running = false;
                }
            }
            StepOutcome::Fading => {}
        }
    }

    pub fn randomize_board(&mut self) {
        self.sim.randomize(DEFAULT_DENSITY);
        self.detector.reset();
    }

    pub fn clear_board(&mut self) {
        self.sim.clear();
        self.detector.reset();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::apply_pattern(&mut self.sim, pattern);
            self.detector.reset();
        }
    }
}
