//! hero-particles: interactive particle field for a portfolio hero section.
//!
//! This crate provides a WASM page component that renders a drifting particle
//! network behind the hero heading, reacting to the pointer and to resizes.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;

pub use components::hero_particles::{
	FieldConfig, HeroParticles, InitSkipped, LifecycleState, ParticleField, WebHost,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hero-particles: logging initialized");
}

/// Main application component.
/// Renders the hero section and starts the particle field once its canvas is
/// in the DOM.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	// Lives as long as the effect, i.e. for the lifetime of the page.
	let particles: Rc<RefCell<Option<HeroParticles<WebHost>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		if canvas_ref.get().is_none() {
			return;
		}
		let mut slot = particles.borrow_mut();
		if slot.is_some() {
			return;
		}
		let Some(host) = WebHost::new() else {
			warn!("hero-particles: no browser window available");
			return;
		};
		let mut controller = HeroParticles::new(host);
		// Skip reasons are logged by init; the hero just stays static.
		let _ = controller.init();
		*slot = Some(controller);
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero" id="home">
			<canvas
				node_ref=canvas_ref
				class="hero_canvas"
				aria-hidden="true"
				style="position: absolute; inset: 0; width: 100%; height: 100%; display: block;"
			/>
			<div class="hero_content">
				<h1 class="hero_title">"Hello, I build things for the web."</h1>
				<p class="hero_subtitle">"Move the pointer across the field."</p>
			</div>
		</section>
	}
}
