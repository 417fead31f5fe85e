//! Interactive particle field for the hero section.
//!
//! Renders drifting particles on an HTML canvas with:
//! - Thin connection lines between particles that come close to each other
//! - Pointer repulsion that fades out linearly with distance
//! - A speed floor so the field never settles
//! - Toroidal wrap-around at the canvas edges
//!
//! The simulation ([`ParticleField`]) only sees the [`DrawingSurface`] and
//! [`Scheduler`] traits; [`WebHost`] supplies the browser implementations and
//! [`HeroParticles`] owns the lifecycle.
//!
//! # Example
//!
//! ```ignore
//! use hero_particles::{HeroParticles, WebHost};
//!
//! if let Some(host) = WebHost::new() {
//!     let mut particles = HeroParticles::new(host);
//!     // Reduced motion or a missing canvas is logged and leaves the hero static.
//!     let _ = particles.init();
//! }
//! ```

mod config;
mod controller;
mod field;
mod host;
mod input;
mod particle;
mod scheduler;
mod surface;
#[cfg(test)]
mod testing;
mod web;

pub use config::{Color, FieldConfig, ParticleStyle, Range};
pub use controller::{HeroParticles, InitSkipped, LifecycleState};
pub use field::{Connection, ParticleField, connection_opacity};
pub use host::{
	EventHandler, Host, HostEvent, ListenerId, ListenerKind, REDUCED_MOTION_QUERY, SURFACE_SELECTOR,
};
pub use input::{Pointer, surface_local};
pub use particle::{Particle, repulsion_force};
pub use scheduler::{FrameCallback, FrameHandle, Scheduler};
pub use surface::{CanvasSurface, DrawingSurface, SurfaceRect};
pub use web::WebHost;
