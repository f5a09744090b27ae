use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::GraphError;
use super::render::Surface;

/// [`Surface`] over a canvas 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Grab the 2D context of `canvas`.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, GraphError> {
		let ctx = canvas
			.get_context("2d")?
			.ok_or(GraphError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| GraphError::ContextUnavailable)?;
		Ok(Self { canvas, ctx })
	}

	/// The element being drawn into.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	/// Match the backing store to the displayed size and return it.
	pub fn fit_to_display(&self) -> (f64, f64) {
		let (w, h) = (self.canvas.offset_width(), self.canvas.offset_height());
		self.canvas.set_width(w.max(0) as u32);
		self.canvas.set_height(h.max(0) as u32);
		(w as f64, h as f64)
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn stroke_segments(&mut self, segments: &[((f64, f64), (f64, f64))], color: &str, width: f64) {
		self.ctx.set_stroke_style_str(color);
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		for &((x1, y1), (x2, y2)) in segments {
			self.ctx.move_to(x1, y1);
			self.ctx.line_to(x2, y2);
		}
		self.ctx.stroke();
	}

	fn fill_circle(&mut self, (x, y): (f64, f64), radius: f64, fill: &str, outline: &str) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		self.ctx.set_fill_style_str(fill);
		self.ctx.fill();
		self.ctx.set_stroke_style_str(outline);
		self.ctx.set_line_width(1.0);
		self.ctx.stroke();
	}

	fn fill_text(&mut self, text: &str, (x, y): (f64, f64), color: &str, font: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.set_font(font);
		let _ = self.ctx.fill_text(text, x, y);
	}
}
