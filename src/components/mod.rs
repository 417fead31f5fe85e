//! UI components.

pub mod hero_particles;
