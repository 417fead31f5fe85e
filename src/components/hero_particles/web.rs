//! Browser host backed by `web_sys`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window,
};

use super::host::{
	EventHandler, Host, HostEvent, ListenerId, ListenerKind, REDUCED_MOTION_QUERY, SURFACE_SELECTOR,
};
use super::scheduler::{FrameCallback, FrameHandle, Scheduler};
use super::surface::CanvasSurface;

/// A DOM listener that stays registered until removed.
struct Registration {
	target: EventTarget,
	event: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

/// [`Host`] for the real page: `requestAnimationFrame`, `matchMedia` and
/// DOM event listeners.
pub struct WebHost {
	window: Window,
	canvas: RefCell<Option<HtmlCanvasElement>>,
	listeners: RefCell<HashMap<ListenerId, Registration>>,
	next_listener: Cell<u32>,
}

impl WebHost {
	/// `None` outside a browser window.
	pub fn new() -> Option<Self> {
		Some(Self {
			window: web_sys::window()?,
			canvas: RefCell::new(None),
			listeners: RefCell::new(HashMap::new()),
			next_listener: Cell::new(0),
		})
	}
}

impl Scheduler for WebHost {
	fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
		// Frees itself once invoked; a cancelled one leaks only the boxed
		// callback, which holds nothing but a weak loop reference.
		let closure = Closure::once_into_js(move || callback());
		match self.window.request_animation_frame(closure.unchecked_ref()) {
			Ok(id) => Some(FrameHandle(id)),
			Err(e) => {
				warn!("hero-particles: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle.0);
	}
}

impl Host for WebHost {
	type Surface = CanvasSurface;

	fn prefers_reduced_motion(&self) -> bool {
		self.window
			.match_media(REDUCED_MOTION_QUERY)
			.ok()
			.flatten()
			.is_some_and(|query| query.matches())
	}

	fn locate_surface(&self) -> Option<CanvasSurface> {
		let document = self.window.document()?;
		let element = document.query_selector(SURFACE_SELECTOR).ok()??;
		let canvas: HtmlCanvasElement = element.dyn_into().ok()?;
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		*self.canvas.borrow_mut() = Some(canvas.clone());
		Some(CanvasSurface::new(canvas, ctx))
	}

	fn add_listener(&self, kind: ListenerKind, mut handler: EventHandler) -> Option<ListenerId> {
		let target: EventTarget = match kind {
			ListenerKind::PointerMove => self.canvas.borrow().clone()?.into(),
			ListenerKind::Resize => self.window.clone().into(),
		};

		let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| match kind {
			ListenerKind::PointerMove => {
				if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
					handler(HostEvent::PointerMove {
						client_x: mouse.client_x() as f64,
						client_y: mouse.client_y() as f64,
					});
				}
			}
			ListenerKind::Resize => handler(HostEvent::Resize),
		});

		let event = kind.event_name();
		if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		{
			warn!("hero-particles: failed to attach {} listener: {:?}", event, e);
			return None;
		}

		let id = ListenerId(self.next_listener.get());
		self.next_listener.set(id.0 + 1);
		self.listeners.borrow_mut().insert(
			id,
			Registration {
				target,
				event,
				closure,
			},
		);
		Some(id)
	}

	fn remove_listener(&self, id: ListenerId) {
		let Some(registration) = self.listeners.borrow_mut().remove(&id) else {
			return;
		};
		let _ = registration.target.remove_event_listener_with_callback(
			registration.event,
			registration.closure.as_ref().unchecked_ref(),
		);
	}

	fn random_seed(&self) -> u64 {
		(js_sys::Math::random() * u64::MAX as f64) as u64
	}
}
