//! Page environment the particle field depends on.

use super::scheduler::Scheduler;
use super::surface::DrawingSurface;

/// Class of the canvas the hero renders into.
pub const SURFACE_SELECTOR: &str = ".hero_canvas";

/// Media query for the user's reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Which host event a listener subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerKind {
	/// Pointer movement over the drawing surface.
	PointerMove,
	/// Window resize.
	Resize,
}

impl ListenerKind {
	/// DOM event name.
	pub fn event_name(self) -> &'static str {
		match self {
			ListenerKind::PointerMove => "mousemove",
			ListenerKind::Resize => "resize",
		}
	}
}

/// An event delivered to a listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
	/// Pointer position in page (client) coordinates.
	PointerMove { client_x: f64, client_y: f64 },
	Resize,
}

/// Registration token returned by [`Host::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

pub type EventHandler = Box<dyn FnMut(HostEvent)>;

/// Everything the lifecycle controller needs from the page: preferences,
/// the drawing surface, event subscriptions and frame scheduling.
pub trait Host: Scheduler {
	type Surface: DrawingSurface + 'static;

	fn prefers_reduced_motion(&self) -> bool;

	/// Finds the element matching [`SURFACE_SELECTOR`].
	fn locate_surface(&self) -> Option<Self::Surface>;

	/// Subscribes `handler`. Pointer listeners attach to the surface last
	/// returned by [`locate_surface`](Self::locate_surface).
	fn add_listener(&self, kind: ListenerKind, handler: EventHandler) -> Option<ListenerId>;

	fn remove_listener(&self, id: ListenerId);

	/// Seed for the particle RNG.
	fn random_seed(&self) -> u64;
}
