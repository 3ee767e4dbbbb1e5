use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::policy_graph::{PolicyGraphCanvas, PolicyGraphData, build_graph};
use crate::loader::{LoadState, ResourceLoader};

/// Policy graph page: drives one resource load at a time and shows exactly
/// one of the loading message, the error panel, or the graph.
#[component]
pub fn Home() -> impl IntoView {
	let loader = RwSignal::new(ResourceLoader::new());

	let load = move || {
		let generation = loader.write().start();
		spawn_local(async move {
			let outcome = api::fetch_resources(api::RESOURCES_URL)
				.await
				.map_err(|err| err.to_string());
			if let Err(ref message) = outcome {
				log::error!("resource fetch failed: {}", message);
			}
			loader.update(|l| {
				l.finish(generation, outcome);
			});
		});
	};

	// Kick off the initial load once the page is mounted.
	Effect::new(move |_| load());

	let graph_data = Signal::derive(move || {
		loader.with(|l| match l.state() {
			LoadState::Loaded(resources) => build_graph(resources),
			_ => PolicyGraphData::default(),
		})
	});

	let on_node_click = Callback::new(|id: String| {
		log::info!("selected resource {}", id);
	});

	view! {
		<div class="app-shell">
			<header class="app-header">
				<h1>"ReBAC Policy Visualization"</h1>
				<p class="subtitle">
					"Interactive view of resources, their roles, and the relations between them."
				</p>
			</header>

			{move || match loader.with(|l| l.state().clone()) {
				LoadState::Loading => {
					view! { <div class="status-panel">"Loading policy data..."</div> }.into_any()
				}
				LoadState::Failed(message) => {
					view! {
						<div class="error-panel">
							<p class="error-message">{message}</p>
							<button class="retry-button" on:click=move |_| load()>
								"Retry"
							</button>
						</div>
					}
					.into_any()
				}
				LoadState::Loaded(_) => {
					view! {
						<div class="graph-panel">
							<PolicyGraphCanvas data=graph_data on_node_click=on_node_click />
						</div>
					}
					.into_any()
				}
			}}
		</div>
	}
}
