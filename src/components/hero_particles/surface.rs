//! The drawing surface the field renders into.
//!
//! The simulation only talks to [`DrawingSurface`]; [`CanvasSurface`] backs it
//! with an HTML canvas and its 2D context.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::Color;

/// On-screen rectangle of the surface, in page (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

/// Pixel sink plus the bits of layout geometry the field needs.
pub trait DrawingSurface {
	/// Current bounding rectangle on screen.
	fn bounds(&self) -> SurfaceRect;
	/// Rendered (CSS layout) size, rounded to whole pixels.
	fn layout_size(&self) -> (u32, u32);
	/// Sets the backing store size. Resets any context state.
	fn set_pixel_size(&self, width: u32, height: u32);
	fn clear(&self, width: f64, height: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
	/// Shadow applied to subsequent fills.
	fn set_glow(&self, blur: f64, color: Color);
}

/// [`DrawingSurface`] over a `<canvas>` element.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}

	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}
}

impl DrawingSurface for CanvasSurface {
	fn bounds(&self) -> SurfaceRect {
		let rect = self.canvas.get_bounding_client_rect();
		SurfaceRect {
			left: rect.left(),
			top: rect.top(),
			width: rect.width(),
			height: rect.height(),
		}
	}

	fn layout_size(&self) -> (u32, u32) {
		(
			self.canvas.offset_width().max(0) as u32,
			self.canvas.offset_height().max(0) as u32,
		)
	}

	fn set_pixel_size(&self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ctx.begin_path();
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}

	fn set_glow(&self, blur: f64, color: Color) {
		self.ctx.set_shadow_blur(blur);
		self.ctx.set_shadow_color(&color.to_css());
	}
}
