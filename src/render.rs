//! Coordinate renderer.
//!
//! Paints the grid, both axes, the tracked point and its label onto any
//! [`Surface`]. The browser 2D context is one surface; tests use a
//! recording one. Every call starts from a cleared surface, so repeated
//! renders never accumulate markers.

use web_sys::CanvasRenderingContext2d;

use crate::model::Point;
use crate::state::GridConfig;

/// The handful of 2D drawing primitives the renderer needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    /// Strokes each `(from, to)` segment in one path.
    fn stroke_lines(&mut self, segments: &[((f64, f64), (f64, f64))], color: &str, width: f64);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn stroke_lines(&mut self, segments: &[((f64, f64), (f64, f64))], color: &str, width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        for &((x0, y0), (x1, y1)) in segments {
            self.move_to(x0, y0);
            self.line_to(x1, y1);
        }
        self.stroke();
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        self.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0).ok();
        self.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str) {
        self.set_fill_style_str(color);
        self.set_font(font);
        CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }
}

/// Where the marker landed, for the readout and for tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub px: f64,
    pub py: f64,
    pub label: String,
}

pub fn render<S: Surface + ?Sized>(surface: &mut S, point: Point, config: &GridConfig) -> Marker {
    let size = f64::from(config.canvas_px());
    let style = &config.style;
    surface.clear(size, size);
    if let Some(bg) = style.background {
        surface.fill_rect(0.0, 0.0, size, size, bg);
    }

    let cell = config.cell_px();
    let mut lines = Vec::with_capacity(2 * (config.cells() as usize + 1));
    for i in 0..=config.cells() {
        let p = f64::from(i) * cell;
        lines.push(((p, 0.0), (p, size)));
    }
    for i in 0..=config.cells() {
        let p = f64::from(i) * cell;
        lines.push(((0.0, p), (size, p)));
    }
    surface.stroke_lines(&lines, style.grid_color, style.grid_width);

    let c = config.center_px();
    surface.stroke_lines(&[((c, 0.0), (c, size)), ((0.0, c), (size, c))], style.axis_color, style.axis_width);
    if style.axis_letters {
        surface.fill_text("Y", c + 10.0, 15.0, "bold 12px Arial", "#555");
        surface.fill_text("X", size - 15.0, c - 10.0, "bold 12px Arial", "#555");
    }

    let (px, py) = config.to_pixel(point.x, point.y);
    surface.fill_circle(px, py, style.marker_radius, style.marker_color);
    let label = point.label();
    surface.fill_text(
        &label,
        px + style.label_offset,
        py - style.label_offset,
        style.label_font,
        style.label_color,
    );
    Marker { px, py, label }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        FillRect { x: f64, y: f64, w: f64, h: f64, color: String },
        Lines { segments: Vec<((f64, f64), (f64, f64))>, color: String, width: f64 },
        Circle { cx: f64, cy: f64, radius: f64, color: String },
        Text { text: String, x: f64, y: f64, font: String },
    }

    /// Keeps what is currently visible; `clear` wipes it like a canvas does.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
        pub clears: usize,
    }

    impl RecordingSurface {
        pub fn circles(&self) -> Vec<&Op> {
            self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).collect()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.ops.clear();
            self.clears += 1;
        }

        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
            self.ops.push(Op::FillRect { x, y, w, h, color: color.to_string() });
        }

        fn stroke_lines(&mut self, segments: &[((f64, f64), (f64, f64))], color: &str, width: f64) {
            self.ops.push(Op::Lines { segments: segments.to_vec(), color: color.to_string(), width });
        }

        fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str) {
            self.ops.push(Op::Circle { cx, cy, radius, color: color.to_string() });
        }

        fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, _color: &str) {
            self.ops.push(Op::Text { text: text.to_string(), x, y, font: font.to_string() });
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn paints_marker_pixel_on_real_canvas() {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: web_sys::HtmlCanvasElement =
            document.create_element("canvas").unwrap().dyn_into().unwrap();
        canvas.set_width(500);
        canvas.set_height(500);
        let mut ctx: CanvasRenderingContext2d =
            canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap();
        let m = render(&mut ctx, Point { x: 3.0, y: -2.0 }, &GridConfig::coarse());
        let pixel = ctx.get_image_data(m.px, m.py, 1.0, 1.0).unwrap().data();
        assert_eq!(pixel[0], 255);
        assert_eq!(pixel[1], 0);
        assert_eq!(pixel[3], 255);
    }
}
