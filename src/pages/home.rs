use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};

/// Relationship graph over the sample catalog.
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(|| Catalog::sample().relationship_graph());
	let (dark, set_dark) = signal(false);

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

			<div class="fullscreen-graph" class:dark=move || dark.get()>
				<ForceGraphCanvas data=graph_data dark=dark />
				<div class="graph-overlay">
					<h1>"Relationship Graph"</h1>
					<p class="subtitle">"Companies, drugs and active ingredients. Drag nodes to rearrange."</p>
					<p class="stats">{move || summary(&graph_data.get())}</p>
					<button class="theme-toggle" on:click=move |_| set_dark.update(|d| *d = !*d)>
						{move || if dark.get() { "Light theme" } else { "Dark theme" }}
					</button>
				</div>
			</div>
		</ErrorBoundary>
	}
}

fn summary(data: &GraphData) -> String {
	format!("{} entities, {} relationships", data.nodes.len(), data.links.len())
}
