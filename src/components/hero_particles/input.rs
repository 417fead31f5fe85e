//! Pointer input mapping.

use super::surface::SurfaceRect;

/// Pointer position in surface-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Pointer {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Center of a `width × height` surface.
	pub fn center(width: f64, height: f64) -> Self {
		Self::new(width / 2.0, height / 2.0)
	}
}

/// Converts page (client) coordinates into surface-local ones by removing the
/// surface's on-screen top-left offset.
pub fn surface_local(client_x: f64, client_y: f64, bounds: SurfaceRect) -> Pointer {
	Pointer::new(client_x - bounds.left, client_y - bounds.top)
}
