use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::components::scene_canvas::SceneCanvas;
use crate::network::{NetworkError, NetworkLayout, NetworkParams};
use crate::scene::SceneConfig;

const NAV_LINKS: [&str; 3] = ["Vision", "Technology", "Ecosystem"];

/// Fresh seed per page load so every visit gets its own network.
fn page_seed() -> u64 {
	(js_sys::Math::random() * f64::from(u32::MAX)) as u64
}

/// Tower layout for `params`, generated once and cached for every read.
fn seeded_layout(params: NetworkParams, seed: u64) -> Memo<Result<NetworkLayout, NetworkError>> {
	Memo::new(move |_| NetworkLayout::generate(&params, &mut StdRng::seed_from_u64(seed)))
}

/// Landing page: the network scene behind the marketing copy.
#[component]
pub fn Home() -> impl IntoView {
	let seed = page_seed();
	let config = SceneConfig::default();
	let params = NetworkParams::from(&config);

	// A bad parameter set surfaces through the error boundary instead of a blank canvas
	let layout = seeded_layout(params, seed);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-scene">
				{move || {
					let config = config.clone();
					layout
						.get()
						.map(|layout| {
							view! { <SceneCanvas layout=layout config=config seed=seed fullscreen=true /> }
						})
				}}
				<div class="page-overlay">
					<nav class="top-nav">
						<span class="brand">"NEURAL LABS"</span>
						<ul class="nav-links">
							{NAV_LINKS
								.iter()
								.map(|label| view! { <li><a href="#">{*label}</a></li> })
								.collect_view()}
						</ul>
					</nav>
					<section class="hero">
						<h1>"The Future of Spatial Intelligence"</h1>
						<p class="subtitle">
							"A living network of towers, signals and minds. Hover a tower to trace its links, hover an app to pause its orbit."
						</p>
						<div class="hero-actions">
							<button class="primary">"Get Started"</button>
							<button class="secondary">"View Documentation"</button>
						</div>
					</section>
					<p class="scroll-hint">"Scroll to explore"</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn layout_is_cached_across_reads() {
		let owner = Owner::new();
		owner.with(|| {
			let params = NetworkParams::default();
			let layout = seeded_layout(params.clone(), 7);
			let first = layout.get();
			let expected = NetworkLayout::generate(&params, &mut StdRng::seed_from_u64(7));
			assert_eq!(first, expected);
			assert_eq!(layout.get(), first);
		});
	}

	#[test]
	fn invalid_parameters_surface_as_errors() {
		let owner = Owner::new();
		owner.with(|| {
			let params = NetworkParams {
				node_count: 0,
				..NetworkParams::default()
			};
			assert!(matches!(
				seeded_layout(params, 1).get(),
				Err(NetworkError::InvalidParameter { name: "node_count", .. })
			));
		});
	}
}
