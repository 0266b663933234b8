// Grid geometry and drawing style, fixed at startup.
use serde::{Deserialize, Serialize};

pub const CANVAS_PX: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridVariant {
    /// 100x100 cells, 5 px per unit.
    #[default]
    Fine,
    /// 25x25 cells, 20 px per unit.
    Coarse,
}

impl GridVariant {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fine" => Some(Self::Fine),
            "coarse" => Some(Self::Coarse),
            _ => None,
        }
    }

    pub fn config(self) -> GridConfig {
        match self {
            Self::Fine => GridConfig::fine(),
            Self::Coarse => GridConfig::coarse(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Solid background painted after clearing; `None` leaves the surface transparent.
    pub background: Option<&'static str>,
    pub grid_color: &'static str,
    pub grid_width: f64,
    pub axis_color: &'static str,
    pub axis_width: f64,
    pub axis_letters: bool,
    pub marker_color: &'static str,
    pub marker_radius: f64,
    pub label_color: &'static str,
    pub label_font: &'static str,
    pub label_offset: f64,
}

/// Canvas size and cell count. Only the presets construct one, and each
/// divides the canvas evenly, so `cell_px() * cells() == canvas_px()`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    canvas_px: u32,
    cells: u32,
    pub style: GridStyle,
}

impl GridConfig {
    pub fn fine() -> Self {
        Self {
            canvas_px: CANVAS_PX,
            cells: 100,
            style: GridStyle {
                background: Some("white"),
                grid_color: "#eee",
                grid_width: 0.5,
                axis_color: "#333",
                axis_width: 1.5,
                axis_letters: true,
                marker_color: "red",
                marker_radius: 3.0,
                label_color: "black",
                label_font: "12px Arial",
                label_offset: 8.0,
            },
        }
    }

    pub fn coarse() -> Self {
        Self {
            canvas_px: CANVAS_PX,
            cells: 25,
            style: GridStyle {
                background: None,
                grid_color: "#ddd",
                grid_width: 1.0,
                axis_color: "#333",
                axis_width: 2.0,
                axis_letters: false,
                marker_color: "red",
                marker_radius: 8.0,
                label_color: "black",
                label_font: "bold 14px Arial",
                label_offset: 10.0,
            },
        }
    }

    pub fn canvas_px(&self) -> u32 {
        self.canvas_px
    }

    pub fn cells(&self) -> u32 {
        self.cells
    }

    /// Pixels per cell, which is also pixels per logical unit.
    pub fn cell_px(&self) -> f64 {
        f64::from(self.canvas_px / self.cells)
    }

    pub fn center_cell(&self) -> f64 {
        f64::from(self.cells) / 2.0
    }

    pub fn center_px(&self) -> f64 {
        self.center_cell() * self.cell_px()
    }

    /// Logical point to canvas pixels. Screen Y grows downward, logical Y upward.
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let c = self.center_px();
        let s = self.cell_px();
        (c + x * s, c - y * s)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::fine()
    }
}
