//! A single drifting particle: seeding, pointer repulsion, friction with a
//! speed floor, and toroidal wrap-around.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::FieldConfig;
use super::input::Pointer;
use super::surface::DrawingSurface;

/// Repulsion strength for a particle `distance` away from the pointer.
///
/// Falls linearly from 1 next to the pointer to 0 at `radius`. Zero distance
/// yields no force since the push direction is undefined there.
pub fn repulsion_force(distance: f64, radius: f64) -> f64 {
	if distance > 0.0 && distance < radius {
		(radius - distance) / radius
	} else {
		0.0
	}
}

/// Wraps `value` into `[0, extent)`.
fn wrap(value: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 0.0;
	}
	let wrapped = value.rem_euclid(extent);
	// rem_euclid rounds up to `extent` for tiny negative inputs
	if wrapped >= extent { 0.0 } else { wrapped }
}

/// Uniform sample in `[0, extent)`.
fn sample_extent<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
	if extent > 0.0 {
		rng.gen_range(0.0..extent)
	} else {
		0.0
	}
}

/// One particle. Radius and opacity are fixed once seeded.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	width: f64,
	height: f64,
}

impl Particle {
	/// Seeds a particle somewhere inside a `width × height` surface.
	pub fn new<R: Rng + ?Sized>(width: f64, height: f64, config: &FieldConfig, rng: &mut R) -> Self {
		let mut particle = Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			radius: 0.0,
			opacity: 0.0,
			width,
			height,
		};
		particle.reset(config, rng);
		// Extra vertical draw so freshly seeded particles don't line up in rows
		particle.y = sample_extent(rng, height);
		particle
	}

	/// Re-randomizes position, velocity, radius and opacity.
	pub fn reset<R: Rng + ?Sized>(&mut self, config: &FieldConfig, rng: &mut R) {
		self.x = sample_extent(rng, self.width);
		self.y = sample_extent(rng, self.height);
		let angle = rng.gen_range(0.0..TAU);
		let speed = config.speed.sample(rng);
		self.vx = angle.cos() * speed;
		self.vy = angle.sin() * speed;
		self.radius = config.radius.sample(rng);
		self.opacity = config.opacity.sample(rng);
	}

	pub fn speed(&self) -> f64 {
		self.vx.hypot(self.vy)
	}

	/// Advances one frame against the current pointer position.
	pub fn update(&mut self, pointer: Pointer, config: &FieldConfig) {
		let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
		let distance = dx.hypot(dy);

		let force = repulsion_force(distance, config.interaction_radius);
		if force > 0.0 {
			self.vx -= dx / distance * force * config.mouse_force;
			self.vy -= dy / distance * force * config.mouse_force;
		}

		self.vx *= config.friction;
		self.vy *= config.friction;

		if self.speed() < config.base_speed {
			let angle = self.vy.atan2(self.vx);
			self.vx = angle.cos() * config.base_speed;
			self.vy = angle.sin() * config.base_speed;
		}

		self.x = wrap(self.x + self.vx, self.width);
		self.y = wrap(self.y + self.vy, self.height);
	}

	pub fn draw(&self, surface: &dyn DrawingSurface, config: &FieldConfig) {
		let style = &config.style;
		surface.set_glow(style.glow_blur, style.glow_color);
		surface.fill_circle(
			self.x,
			self.y,
			self.radius,
			style.color.with_alpha(self.opacity),
		);
	}
}
