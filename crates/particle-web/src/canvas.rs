use std::f64::consts::TAU;

use glam::Vec2;
use particle_field::{Color, Glow, GradientStop, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`Surface`] backed by a 2D canvas context.
///
/// The canvas backing store follows the field size: `clear` resizes the
/// element whenever the field was rebuilt at a new size.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `<canvas id=...>` in the current document and grab its 2D context.
    pub fn from_element_id(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(JsValue::from)?;
        Self::new(canvas)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx })
    }

    fn disc(&self, center: Vec2, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn try_fill_radial(&self, center: Vec2, radius: f32, stops: &[GradientStop]) -> Result<(), JsValue> {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)?;
        for stop in stops {
            gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.disc(center, radius)
    }

    fn try_fill_glow(&self, center: Vec2, radius: f32, color: Color, glow: Glow) -> Result<(), JsValue> {
        self.ctx.set_shadow_color(&glow.color.to_css());
        self.ctx.set_shadow_blur(glow.blur as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        let result = self.disc(center, radius);
        self.ctx.set_shadow_blur(0.0);
        result
    }
}

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("canvas {} failed: {:?}", what, err);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        let width = size.x.max(0.0) as u32;
        let height = size.y.max(0.0) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        report(self.try_fill_radial(center, radius, stops), "radial fill");
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Color, glow: Glow) {
        report(self.try_fill_glow(center, radius, color, glow), "glow fill");
    }
}
