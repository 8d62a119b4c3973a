//! Render surface collaborator
//!
//! Rendering is a pure read of cell positions, types, and states. The core
//! only defines the seam: a surface fills a scaled slot with a cell's kind
//! (which carries its display color) and, when the scale permits, overlays
//! the mnemonic+state label. The windowing shell supplies the real surface;
//! `TextSurface` is the ASCII implementation used headless and in tests.

use crate::core::types::CellType;
use crate::world::World;

pub trait RenderSurface {
    /// Paint one grid slot with the cell's kind at the given scale
    fn fill_cell(&mut self, x: usize, y: usize, scale: f32, kind: CellType);

    /// Overlay the mnemonic+state label on one slot
    fn draw_label(&mut self, x: usize, y: usize, scale: f32, label: &str);
}

/// Paint every live cell, overlaying labels when the scale permits
pub fn render<S: RenderSurface>(world: &World, surface: &mut S, scale: f32, label_min_scale: f32) {
    for cell in world.cells() {
        surface.fill_cell(cell.x, cell.y, scale, cell.props.kind());
        if scale >= label_min_scale {
            surface.draw_label(cell.x, cell.y, scale, &cell.label());
        }
    }
}

/// ASCII render surface: one mnemonic character per slot
pub struct TextSurface {
    width: usize,
    height: usize,
    chars: Vec<char>,
}

impl TextSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            chars: vec!['.'; width * height],
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.chars[y * self.width + x]);
            }
            out.push('\n');
        }
        out
    }

    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.chars[y * self.width + x]
    }
}

impl RenderSurface for TextSurface {
    fn fill_cell(&mut self, x: usize, y: usize, _scale: f32, kind: CellType) {
        if x < self.width && y < self.height {
            self.chars[y * self.width + x] = kind.mnemonic();
        }
    }

    fn draw_label(&mut self, _x: usize, _y: usize, _scale: f32, _label: &str) {
        // one character per slot; the fill already shows the mnemonic
    }
}
