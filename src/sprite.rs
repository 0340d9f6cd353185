// sprite.rs - the heart glyph drawn for alive cells and for fading trails

use eframe::egui;
use egui::{Color32, Painter, Pos2, Shape, Stroke, Vec2, vec2};

/// Heart geometry laid out once for a given cell size and tint: two round
/// lobes and a triangular point, all as offsets from a cell's top-left
/// corner. Rebuilt only when the cell size or the tint changes.
pub struct HeartSprite {
    cell: f32,
    color: Color32,
    lobe_radius: f32,
    lobes: [Vec2; 2],
    point: [Vec2; 3],
}

impl HeartSprite {
    pub fn new(cell: f32, color: Color32) -> Self {
        Self {
            cell,
            color,
            lobe_radius: cell * 0.21,
            lobes: [
                vec2(cell * 0.31, cell * 0.34),
                vec2(cell * 0.69, cell * 0.34),
            ],
            point: [
                vec2(cell * 0.11, cell * 0.46),
                vec2(cell * 0.89, cell * 0.46),
                vec2(cell * 0.50, cell * 0.92),
            ],
        }
    }

    pub fn matches(&self, cell: f32, color: Color32) -> bool {
        self.cell == cell && self.color == color
    }

    /// Draw one heart with its top-left corner at `min`. `alpha` is 1.0 for
    /// an alive cell and the fade intensity for a trail.
    pub fn paint(&self, painter: &Painter, min: Pos2, alpha: f32) {
        let alpha = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
        let color =
            Color32::from_rgba_unmultiplied(self.color.r(), self.color.g(), self.color.b(), alpha);

        for lobe in self.lobes {
            painter.circle_filled(min + lobe, self.lobe_radius, color);
        }
        let point: Vec<Pos2> = self.point.iter().map(|&offset| min + offset).collect();
        painter.add(Shape::convex_polygon(point, color, Stroke::NONE));
    }
}
