use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::sprites::Rect;

/// Wrapper around a 2D canvas context with helper methods
pub struct Canvas2D {
    pub ctx: CanvasRenderingContext2d,
}

impl Canvas2D {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to query 2d context: {}", js_error(&e)))?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Context is not a CanvasRenderingContext2d".to_string())?;
        Ok(Self { ctx })
    }

    /// Fill a rectangle with an `rgba()` color
    pub fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    /// Draw an image stretched into `rect`
    pub fn draw_image(&self, image: &HtmlImageElement, rect: Rect) -> Result<(), String> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                rect.x as f64,
                rect.y as f64,
                rect.w as f64,
                rect.h as f64,
            )
            .map_err(|e| format!("Failed to draw image: {}", js_error(&e)))
    }

    /// Straight line segment
    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }

    /// Filled ellipse given its center and radii
    pub fn fill_ellipse(&self, cx: f32, cy: f32, rx: f32, ry: f32, color: &str) -> Result<(), String> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .ellipse(cx as f64, cy as f64, rx as f64, ry as f64, 0.0, 0.0, std::f64::consts::TAU)
            .map_err(|e| format!("Failed to trace ellipse: {}", js_error(&e)))?;
        self.ctx.fill();
        Ok(())
    }

    /// Stroked elliptical arc from `start` to `end` radians
    #[allow(clippy::too_many_arguments)]
    pub fn stroke_arc(
        &self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        start: f32,
        end: f32,
        width: f32,
        color: &str,
    ) -> Result<(), String> {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx
            .ellipse(cx as f64, cy as f64, rx as f64, ry as f64, 0.0, start as f64, end as f64)
            .map_err(|e| format!("Failed to trace arc: {}", js_error(&e)))?;
        self.ctx.stroke();
        Ok(())
    }

    /// Filled closed polygon
    pub fn fill_polygon(&self, points: &[(f32, f32)], color: &str) {
        let Some(&(x0, y0)) = points.first() else {
            return;
        };
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(x0 as f64, y0 as f64);
        for &(x, y) in &points[1..] {
            self.ctx.line_to(x as f64, y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    /// Text at a point with the given alignment (`left`, `center`, `right`)
    pub fn fill_text(&self, text: &str, x: f32, y: f32, font: &str, align: &str, color: &str) -> Result<(), String> {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align(align);
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(text, x as f64, y as f64)
            .map_err(|e| format!("Failed to draw text: {}", js_error(&e)))
    }

    /// Push a translated + rotated frame
    pub fn push_transform(&self, x: f32, y: f32, angle: f32) -> Result<(), String> {
        self.ctx.save();
        self.ctx
            .translate(x as f64, y as f64)
            .and_then(|_| self.ctx.rotate(angle as f64))
            .map_err(|e| format!("Failed to set transform: {}", js_error(&e)))
    }

    pub fn pop_transform(&self) {
        self.ctx.restore();
    }
}

pub(crate) fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
