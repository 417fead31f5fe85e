//! Test doubles: a surface that records draw calls and a host whose frames
//! only advance when a test steps them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::config::Color;
use super::host::{EventHandler, Host, HostEvent, ListenerId, ListenerKind};
use super::scheduler::{FrameCallback, FrameHandle, Scheduler};
use super::surface::{DrawingSurface, SurfaceRect};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear {
		width: f64,
		height: f64,
	},
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: Color,
	},
	Glow {
		blur: f64,
		color: Color,
	},
}

#[derive(Debug, Default)]
struct SurfaceState {
	layout: Cell<(u32, u32)>,
	pixels: Cell<(u32, u32)>,
	offset: Cell<(f64, f64)>,
	calls: RefCell<Vec<DrawCall>>,
}

/// Shared handle; clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
	state: Rc<SurfaceState>,
}

impl RecordingSurface {
	pub fn new(width: u32, height: u32) -> Self {
		let surface = Self::default();
		surface.state.layout.set((width, height));
		surface
	}

	pub fn set_layout_size(&self, width: u32, height: u32) {
		self.state.layout.set((width, height));
	}

	pub fn set_offset(&self, left: f64, top: f64) {
		self.state.offset.set((left, top));
	}

	pub fn pixel_size(&self) -> (u32, u32) {
		self.state.pixels.get()
	}

	pub fn calls(&self) -> Vec<DrawCall> {
		self.state.calls.borrow().clone()
	}

	pub fn reset_calls(&self) {
		self.state.calls.borrow_mut().clear();
	}

	fn record(&self, call: DrawCall) {
		self.state.calls.borrow_mut().push(call);
	}
}

impl DrawingSurface for RecordingSurface {
	fn bounds(&self) -> SurfaceRect {
		let (left, top) = self.state.offset.get();
		let (width, height) = self.state.layout.get();
		SurfaceRect {
			left,
			top,
			width: width as f64,
			height: height as f64,
		}
	}

	fn layout_size(&self) -> (u32, u32) {
		self.state.layout.get()
	}

	fn set_pixel_size(&self, width: u32, height: u32) {
		self.state.pixels.set((width, height));
	}

	fn clear(&self, width: f64, height: f64) {
		self.record(DrawCall::Clear { width, height });
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.record(DrawCall::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.record(DrawCall::Line {
			from,
			to,
			width,
			color,
		});
	}

	fn set_glow(&self, blur: f64, color: Color) {
		self.record(DrawCall::Glow { blur, color });
	}
}

/// Host whose frames run only on [`step`](ManualHost::step).
#[derive(Default)]
pub struct ManualHost {
	reduced_motion: bool,
	surface: Option<RecordingSurface>,
	next_id: Cell<i32>,
	frames: RefCell<Vec<(FrameHandle, FrameCallback)>>,
	listeners: RefCell<Vec<(ListenerId, ListenerKind, EventHandler)>>,
}

impl ManualHost {
	pub fn with_surface(surface: RecordingSurface) -> Self {
		Self {
			surface: Some(surface),
			..Self::default()
		}
	}

	pub fn without_surface() -> Self {
		Self::default()
	}

	pub fn reduced_motion(mut self) -> Self {
		self.reduced_motion = true;
		self
	}

	fn next_id(&self) -> i32 {
		let id = self.next_id.get() + 1;
		self.next_id.set(id);
		id
	}

	pub fn pending_frames(&self) -> usize {
		self.frames.borrow().len()
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	pub fn listener_kinds(&self) -> Vec<ListenerKind> {
		self.listeners.borrow().iter().map(|(_, kind, _)| *kind).collect()
	}

	/// Runs every frame queued so far; frames they queue wait for the next
	/// step. Returns how many ran.
	pub fn step(&self) -> usize {
		let due = std::mem::take(&mut *self.frames.borrow_mut());
		let count = due.len();
		for (_, callback) in due {
			callback();
		}
		count
	}

	/// Removes the queued frames without running them.
	pub fn take_frames(&self) -> Vec<FrameCallback> {
		std::mem::take(&mut *self.frames.borrow_mut())
			.into_iter()
			.map(|(_, callback)| callback)
			.collect()
	}

	/// Delivers `event` to every listener of the matching kind.
	pub fn dispatch(&self, event: HostEvent) {
		let kind = match event {
			HostEvent::PointerMove { .. } => ListenerKind::PointerMove,
			HostEvent::Resize => ListenerKind::Resize,
		};
		for (_, listener_kind, handler) in self.listeners.borrow_mut().iter_mut() {
			if *listener_kind == kind {
				handler(event);
			}
		}
	}
}

impl Scheduler for ManualHost {
	fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
		let handle = FrameHandle(self.next_id());
		self.frames.borrow_mut().push((handle, callback));
		Some(handle)
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		self.frames.borrow_mut().retain(|(queued, _)| *queued != handle);
	}
}

impl Host for ManualHost {
	type Surface = RecordingSurface;

	fn prefers_reduced_motion(&self) -> bool {
		self.reduced_motion
	}

	fn locate_surface(&self) -> Option<RecordingSurface> {
		self.surface.clone()
	}

	fn add_listener(&self, kind: ListenerKind, handler: EventHandler) -> Option<ListenerId> {
		let id = ListenerId(self.next_id() as u32);
		self.listeners.borrow_mut().push((id, kind, handler));
		Some(id)
	}

	fn remove_listener(&self, id: ListenerId) {
		self.listeners.borrow_mut().retain(|(registered, _, _)| *registered != id);
	}

	fn random_seed(&self) -> u64 {
		42
	}
}
