//! Visual and physical constants for the particle field.
//!
//! Everything here is fixed at compile time. [`FieldConfig::HERO`] is the
//! configuration the page uses; tests build variants with struct update syntax.

use rand::Rng;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Closed interval sampled uniformly when a particle is (re)seeded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

impl Range {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Uniform sample in `[min, max)`; a degenerate range yields `min`.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		if self.max > self.min {
			rng.gen_range(self.min..self.max)
		} else {
			self.min
		}
	}

	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

/// Particle appearance.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Fill color; alpha is replaced by each particle's opacity.
	pub color: Color,
	/// Shadow color used for the glow around every particle.
	pub glow_color: Color,
	/// Shadow blur radius in pixels.
	pub glow_blur: f64,
	/// Stroke width for connection lines.
	pub line_width: f64,
	/// Opacity of a connection between two coincident particles.
	pub max_connection_opacity: f64,
}

/// Complete simulation and rendering configuration.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Number of particles allocated on every resize.
	pub particle_count: usize,
	/// Particles closer than this are joined by a line.
	pub connection_distance: f64,
	/// Pointer repulsion reaches this far (pixels).
	pub interaction_radius: f64,
	/// Peak repulsion impulse, applied at zero distance.
	pub mouse_force: f64,
	/// Per-frame multiplicative velocity damping (< 1).
	pub friction: f64,
	/// Speed floor restored after friction.
	pub base_speed: f64,
	/// Initial speed range.
	pub speed: Range,
	/// Radius range.
	pub radius: Range,
	/// Fill opacity range.
	pub opacity: Range,
	pub style: ParticleStyle,
}

impl FieldConfig {
	/// The hero section's particle field.
	pub const HERO: FieldConfig = FieldConfig {
		particle_count: 40,
		connection_distance: 120.0,
		interaction_radius: 100.0,
		mouse_force: 1.2,
		friction: 0.95,
		base_speed: 0.5,
		speed: Range::new(0.5, 1.5),
		radius: Range::new(1.5, 3.5),
		opacity: Range::new(0.4, 0.9),
		style: ParticleStyle {
			color: Color::rgb(0, 212, 255),
			glow_color: Color::rgba(0, 212, 255, 0.5),
			glow_blur: 10.0,
			line_width: 1.0,
			max_connection_opacity: 0.3,
		},
	};
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::HERO
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn color_css_drops_alpha_when_opaque() {
		assert_eq!(Color::rgb(0, 212, 255).to_css(), "#00d4ff");
		assert_eq!(
			Color::rgb(0, 212, 255).with_alpha(0.5).to_css(),
			"rgba(0, 212, 255, 0.5)"
		);
	}

	#[test]
	fn range_samples_stay_inside() {
		let mut rng = SmallRng::seed_from_u64(7);
		let range = Range::new(1.5, 3.5);
		for _ in 0..1000 {
			assert!(range.contains(range.sample(&mut rng)));
		}
	}

	#[test]
	fn degenerate_range_returns_min() {
		let mut rng = SmallRng::seed_from_u64(7);
		assert_eq!(Range::new(2.0, 2.0).sample(&mut rng), 2.0);
	}
}
