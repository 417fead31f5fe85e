//! The particle field: owns the particles, the surface extent and the pointer,
//! and runs one simulation/render step per frame.
//!
//! Connections are found with a plain pairwise scan, which is O(n²) per frame.
//! That is fine for the few dozen particles the hero uses; a field with
//! hundreds of particles would want grid buckets keyed by connection distance.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::config::FieldConfig;
use super::input::Pointer;
use super::particle::Particle;
use super::surface::DrawingSurface;

/// A line drawn between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub opacity: f64,
}

/// Opacity of a connection spanning `distance`, or `None` when the particles
/// are too far apart to connect.
///
/// Linear from `max_opacity` at zero distance down to zero at `max_distance`.
pub fn connection_opacity(distance: f64, max_distance: f64, max_opacity: f64) -> Option<f64> {
	(distance < max_distance).then(|| (1.0 - distance / max_distance) * max_opacity)
}

/// All particles on one surface, plus the pointer they react to.
pub struct ParticleField {
	config: FieldConfig,
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	pointer: Pointer,
	rng: SmallRng,
}

impl ParticleField {
	/// Creates an empty field; call [`resize`](Self::resize) to populate it.
	pub fn new(config: FieldConfig, seed: u64) -> Self {
		Self {
			config,
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
			pointer: Pointer::default(),
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn pointer(&self) -> Pointer {
		self.pointer
	}

	pub fn set_pointer(&mut self, pointer: Pointer) {
		self.pointer = pointer;
	}

	/// Adopts new surface dimensions and reseeds every particle from scratch.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		let (config, rng) = (&self.config, &mut self.rng);
		self.particles = (0..config.particle_count)
			.map(|_| Particle::new(width, height, config, &mut *rng))
			.collect();
	}

	/// Drops every particle.
	pub fn clear(&mut self) {
		self.particles.clear();
	}

	/// Every pair closer than the connection distance, each pair once.
	pub fn connections(&self) -> Vec<Connection> {
		let max_distance = self.config.connection_distance;
		let max_opacity = self.config.style.max_connection_opacity;
		let mut connections = Vec::new();

		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				let distance = (a.x - b.x).hypot(a.y - b.y);
				if let Some(opacity) = connection_opacity(distance, max_distance, max_opacity) {
					connections.push(Connection {
						from: (a.x, a.y),
						to: (b.x, b.y),
						opacity,
					});
				}
			}
		}

		connections
	}

	pub fn draw_connections(&self, surface: &dyn DrawingSurface) {
		let style = &self.config.style;
		for connection in self.connections() {
			surface.stroke_line(
				connection.from,
				connection.to,
				style.line_width,
				style.color.with_alpha(connection.opacity),
			);
		}
	}

	/// One animation frame: clear, connections underneath, then update and
	/// draw each particle.
	pub fn frame(&mut self, surface: &dyn DrawingSurface) {
		surface.clear(self.width, self.height);
		self.draw_connections(surface);

		let pointer = self.pointer;
		for particle in &mut self.particles {
			particle.update(pointer, &self.config);
			particle.draw(surface, &self.config);
		}
	}
}
