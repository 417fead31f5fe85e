//! Lifecycle of the hero particle field.
//!
//! [`HeroParticles`] wires a [`ParticleField`] to a [`Host`]: it sizes the
//! surface, subscribes to pointer and resize events, and drives a
//! self-rescheduling frame loop until [`stop`](HeroParticles::stop) is called.
//!
//! ```text
//! Uninitialized --init--> Running --stop--> Stopped --init--> Running
//!       |
//!       +--init (reduced motion / no surface)--> Disabled
//! ```

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use log::{debug, info, warn};

use super::config::FieldConfig;
use super::field::ParticleField;
use super::host::{Host, HostEvent, ListenerId, ListenerKind, SURFACE_SELECTOR};
use super::input::{self, Pointer};
use super::scheduler::FrameHandle;
use super::surface::DrawingSurface;

/// Why [`HeroParticles::init`] left the field disabled. Neither case is a
/// failure of the page; the hero simply renders without particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitSkipped {
	/// The user asked for reduced motion.
	ReducedMotion,
	/// No element matched the surface selector.
	SurfaceMissing,
}

impl fmt::Display for InitSkipped {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			InitSkipped::ReducedMotion => write!(f, "disabled by prefers-reduced-motion"),
			InitSkipped::SurfaceMissing => write!(f, "no {} element found", SURFACE_SELECTOR),
		}
	}
}

impl std::error::Error for InitSkipped {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
	Uninitialized,
	Running,
	Stopped,
	/// Terminal.
	Disabled(InitSkipped),
}

/// The per-frame loop. Callbacks handed to the scheduler hold only a weak
/// reference, so a frame that fires after the session is gone does nothing.
struct FrameLoop<H: Host> {
	host: Rc<H>,
	field: Rc<RefCell<ParticleField>>,
	surface: Rc<H::Surface>,
	pending: Cell<Option<FrameHandle>>,
	active: Cell<bool>,
}

impl<H: Host + 'static> FrameLoop<H> {
	fn schedule(this: &Rc<Self>) {
		let weak = Rc::downgrade(this);
		let handle = this.host.request_frame(Box::new(move || {
			if let Some(frame_loop) = weak.upgrade() {
				FrameLoop::run(&frame_loop);
			}
		}));
		if handle.is_none() {
			warn!("hero-particles: host refused to schedule a frame");
		}
		this.pending.set(handle);
	}

	fn run(this: &Rc<Self>) {
		this.pending.set(None);
		if !this.active.get() {
			return;
		}
		this.field.borrow_mut().frame(&*this.surface);
		if this.active.get() {
			FrameLoop::schedule(this);
		}
	}

	/// Invalidates the loop before cancelling so nothing can reschedule.
	fn halt(&self) {
		self.active.set(false);
		if let Some(handle) = self.pending.take() {
			self.host.cancel_frame(handle);
		}
	}
}

/// Everything that exists only while running.
struct Session<H: Host> {
	frame_loop: Rc<FrameLoop<H>>,
	listeners: Vec<ListenerId>,
}

/// Owns the particle field for the hero canvas.
pub struct HeroParticles<H: Host> {
	host: Rc<H>,
	config: FieldConfig,
	state: LifecycleState,
	session: Option<Session<H>>,
}

impl<H: Host + 'static> HeroParticles<H> {
	pub fn new(host: H) -> Self {
		Self::with_config(host, FieldConfig::HERO)
	}

	pub fn with_config(host: H, config: FieldConfig) -> Self {
		Self {
			host: Rc::new(host),
			config,
			state: LifecycleState::Uninitialized,
			session: None,
		}
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn state(&self) -> LifecycleState {
		self.state
	}

	/// The running field, if any.
	pub fn field(&self) -> Option<Ref<'_, ParticleField>> {
		self.session
			.as_ref()
			.map(|session| session.frame_loop.field.borrow())
	}

	/// Starts the field. Skips (and logs why) when the user prefers reduced
	/// motion or the page has no hero canvas.
	pub fn init(&mut self) -> Result<(), InitSkipped> {
		match self.state {
			LifecycleState::Running => {
				debug!("hero-particles: init called while running, ignoring");
				return Ok(());
			}
			LifecycleState::Disabled(reason) => return Err(reason),
			LifecycleState::Uninitialized | LifecycleState::Stopped => {}
		}

		if self.host.prefers_reduced_motion() {
			info!("hero-particles: disabled due to prefers-reduced-motion");
			return Err(self.disable(InitSkipped::ReducedMotion));
		}

		let Some(surface) = self.host.locate_surface() else {
			warn!("hero-particles: no {} element found", SURFACE_SELECTOR);
			return Err(self.disable(InitSkipped::SurfaceMissing));
		};
		let surface = Rc::new(surface);

		let (width, height) = fit_surface(&*surface);
		let mut field = ParticleField::new(self.config.clone(), self.host.random_seed());
		field.resize(width, height);
		field.set_pointer(Pointer::center(width, height));
		let count = field.particles().len();
		let field = Rc::new(RefCell::new(field));

		let mut listeners = Vec::with_capacity(2);

		let (field_pm, surface_pm) = (field.clone(), surface.clone());
		listeners.extend(self.host.add_listener(
			ListenerKind::PointerMove,
			Box::new(move |event| {
				if let HostEvent::PointerMove { client_x, client_y } = event {
					let pointer = input::surface_local(client_x, client_y, surface_pm.bounds());
					field_pm.borrow_mut().set_pointer(pointer);
				}
			}),
		));

		let (field_rs, surface_rs) = (field.clone(), surface.clone());
		listeners.extend(self.host.add_listener(
			ListenerKind::Resize,
			Box::new(move |event| {
				if event == HostEvent::Resize {
					let (width, height) = fit_surface(&*surface_rs);
					field_rs.borrow_mut().resize(width, height);
				}
			}),
		));

		let frame_loop = Rc::new(FrameLoop {
			host: self.host.clone(),
			field,
			surface,
			pending: Cell::new(None),
			active: Cell::new(true),
		});
		FrameLoop::schedule(&frame_loop);

		self.session = Some(Session {
			frame_loop,
			listeners,
		});
		self.state = LifecycleState::Running;
		info!("hero-particles: initialized with {} particles", count);
		Ok(())
	}

	/// Cancels the frame loop, detaches listeners and drops the particles.
	/// Safe to call in any state.
	pub fn stop(&mut self) {
		let Some(session) = self.session.take() else {
			return;
		};

		session.frame_loop.halt();
		for id in session.listeners {
			self.host.remove_listener(id);
		}
		session.frame_loop.field.borrow_mut().clear();

		self.state = LifecycleState::Stopped;
		debug!("hero-particles: stopped");
	}

	fn disable(&mut self, reason: InitSkipped) -> InitSkipped {
		self.state = LifecycleState::Disabled(reason);
		reason
	}
}

/// Matches the backing store to the rendered size and returns it.
fn fit_surface(surface: &dyn DrawingSurface) -> (f64, f64) {
	let (width, height) = surface.layout_size();
	surface.set_pixel_size(width, height);
	(width as f64, height as f64)
}
