// ui.rs - egui driver: playback timer, controls, board painting, cell editing

use eframe::egui;
use egui::{Pos2, Response, Sense, Slider, vec2};
use std::time::{Duration, Instant};

use crate::HeartLife;
use crate::config::CELL;
use crate::patterns;
use crate::sprite::HeartSprite;

impl eframe::App for HeartLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-step while running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Heart of Life");

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.is_running, egui::Button::new("▶ Start"))
                    .clicked()
                {
                    self.is_running = true;
                    self.last_update = Instant::now();
                }
                if ui
                    .add_enabled(self.is_running, egui::Button::new("⏸ Stop"))
                    .clicked()
                {
                    self.is_running = false;
                }
                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.advance();
                }
                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.randomize_board();
                }
                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_board();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Interval:");
                if ui
                    .add(Slider::new(&mut self.interval_ms, 30..=1000).suffix(" ms"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis(self.interval_ms);
                    // Re-arm the schedule so the new pace applies right away
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                ui.separator();

                ui.checkbox(&mut self.stop_on_repeat, "Stop on repeats")
                    .on_hover_text(
                        "Also halts oscillators and looping gliders by remembering recent boards",
                    );

                ui.separator();

                ui.label("Alive:");
                ui.color_edit_button_srgba(&mut self.alive_color);
                ui.label("Background:");
                ui.color_edit_button_srgba(&mut self.bg_color);
            });

            ui.collapsing("Rules", |ui| {
                ui.label("An alive cell survives with 2 or 3 alive neighbors.");
                ui.label("A dead cell comes alive with exactly 3 alive neighbors.");
                ui.label("Everything else dies or stays dead; the dead leave a fading trail.");
                ui.label("Click or drag on the board to draw. The board edge is a hard wall.");
            });

            ui.separator();

            let board_size = vec2(
                self.sim.cols() as f32 * CELL,
                self.sim.rows() as f32 * CELL,
            );
            let (response, painter) = ui.allocate_painter(board_size, Sense::click_and_drag());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 2.0, self.bg_color);

            if !self.sprite.matches(CELL, self.alive_color) {
                self.sprite = HeartSprite::new(CELL, self.alive_color);
            }

            for row in 0..self.sim.rows() {
                for col in 0..self.sim.cols() {
                    let min = origin + vec2(col as f32 * CELL, row as f32 * CELL);
                    if self.sim.grid()[(row, col)] {
                        self.sprite.paint(&painter, min, 1.0);
                    } else {
                        let fade = self.sim.fade()[(row, col)];
                        if fade > 0.0 {
                            self.sprite.paint(&painter, min, fade);
                        }
                    }
                }
            }

            self.paint_with_pointer(&response);

            ui.separator();

            ui.horizontal(|ui| {
                let alive = self.sim.alive_count();
                let total = self.sim.rows() * self.sim.cols();
                ui.label(format!("Generation: {}", self.sim.generation()));
                ui.label(format!("Live cells: {alive}"));
                ui.label(format!(
                    "Population: {:.1}%",
                    alive as f32 / total as f32 * 100.0
                ));
                ui.label(format!("Cell size: {CELL} px"));
                if self.sim.is_stable() {
                    ui.label("Stable");
                }
            });
        });

        // Keep the animation smooth while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl HeartLife {
    /// Board drawing: the first press decides the value (the inverse of the
    /// cell under it) and dragging spreads that value. Under
    /// `Sense::click_and_drag` the press itself starts the drag, so each
    /// press paints exactly once and the matching release changes nothing.
    fn paint_with_pointer(&mut self, response: &Response) {
        let origin = response.rect.min;
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (row, col) = self.pointer_cell(origin, pos);
                self.paint_value = !self.sim.grid()[(row, col)];
                self.sim.set_cell(row, col, self.paint_value);
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (row, col) = self.pointer_cell(origin, pos);
                self.sim.set_cell(row, col, self.paint_value);
            }
        }
    }

    /// Map a pointer position to the cell under it. Positions slightly off
    /// the board clamp to the nearest edge cell, so drawing along the border
    /// does not cut out.
    fn pointer_cell(&self, origin: Pos2, pos: Pos2) -> (usize, usize) {
        let row = ((pos.y - origin.y) / CELL).floor() as isize;
        let col = ((pos.x - origin.x) / CELL).floor() as isize;
        let row = row.clamp(0, self.sim.rows() as isize - 1) as usize;
        let col = col.clamp(0, self.sim.cols() as isize - 1) as usize;
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, Event, Modifiers, PointerButton, RawInput, Rect, pos2};

    fn app_with_empty_board() -> HeartLife {
        let mut app = HeartLife::default();
        app.sim.clear();
        app
    }

    /// Runs one headless frame: lays out the board surface, feeds it the
    /// pointer events, runs the editing handler. Returns the board rect so
    /// tests can aim at cell centers.
    fn board_frame(ctx: &Context, app: &mut HeartLife, events: Vec<Event>) -> Rect {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(1100.0, 700.0))),
            events,
            ..Default::default()
        };

        let mut board_rect = Rect::NOTHING;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let board_size = vec2(
                    app.sim.cols() as f32 * CELL,
                    app.sim.rows() as f32 * CELL,
                );
                let (response, _painter) =
                    ui.allocate_painter(board_size, Sense::click_and_drag());
                board_rect = response.rect;
                app.paint_with_pointer(&response);
            });
        });
        board_rect
    }

    fn cell_center(board: Rect, row: usize, col: usize) -> Pos2 {
        board.min + vec2((col as f32 + 0.5) * CELL, (row as f32 + 0.5) * CELL)
    }

    fn press(pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::default(),
        }
    }

    fn release(pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn stationary_click_toggles_the_cell_once() {
        let ctx = Context::default();
        let mut app = app_with_empty_board();

        let board = board_frame(&ctx, &mut app, vec![]);
        let pos = cell_center(board, 2, 3);

        board_frame(&ctx, &mut app, vec![press(pos)]);
        assert!(
            app.sim.grid()[(2, 3)],
            "pressing a dead cell paints it alive"
        );

        board_frame(&ctx, &mut app, vec![release(pos)]);
        assert!(
            app.sim.grid()[(2, 3)],
            "releasing in place leaves the cell as painted"
        );

        // The next full click on the same spot toggles it back off
        board_frame(&ctx, &mut app, vec![press(pos)]);
        board_frame(&ctx, &mut app, vec![release(pos)]);
        assert!(!app.sim.grid()[(2, 3)]);
    }

    #[test]
    fn dragging_spreads_the_press_value() {
        let ctx = Context::default();
        let mut app = app_with_empty_board();
        // An alive cell on the path: spreading keeps it alive, while
        // toggling cell by cell would kill it
        app.sim.set_cell(5, 7, true);

        let board = board_frame(&ctx, &mut app, vec![]);

        board_frame(&ctx, &mut app, vec![press(cell_center(board, 5, 5))]);
        board_frame(
            &ctx,
            &mut app,
            vec![Event::PointerMoved(cell_center(board, 5, 6))],
        );
        board_frame(
            &ctx,
            &mut app,
            vec![Event::PointerMoved(cell_center(board, 5, 7))],
        );
        board_frame(&ctx, &mut app, vec![release(cell_center(board, 5, 7))]);

        assert!(app.sim.grid()[(5, 5)]);
        assert!(app.sim.grid()[(5, 6)]);
        assert!(app.sim.grid()[(5, 7)]);
    }

    #[test]
    fn dragging_from_an_alive_cell_erases() {
        let ctx = Context::default();
        let mut app = app_with_empty_board();
        app.sim.set_cell(3, 3, true);
        app.sim.set_cell(3, 4, true);

        let board = board_frame(&ctx, &mut app, vec![]);

        board_frame(&ctx, &mut app, vec![press(cell_center(board, 3, 3))]);
        board_frame(
            &ctx,
            &mut app,
            vec![Event::PointerMoved(cell_center(board, 3, 4))],
        );
        board_frame(&ctx, &mut app, vec![release(cell_center(board, 3, 4))]);

        assert!(!app.sim.grid()[(3, 3)]);
        assert!(!app.sim.grid()[(3, 4)]);
    }
}
