use leptos::prelude::*;
use log::error;

use super::config::{RenderStyle, SimulationConfig};
use super::engine::GraphEngine;
use super::types::GraphData;

fn style_for(dark: bool) -> RenderStyle {
	if dark {
		RenderStyle::dark()
	} else {
		RenderStyle::light()
	}
}

/// Canvas showing `data` as a live force-directed layout. Nodes can be dragged.
#[component]
pub fn ForceGraphCanvas(
	/// Graph to lay out; replaced wholesale whenever it changes.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Use the dark palette.
	#[prop(into, default = Signal::stored(false))]
	dark: Signal<bool>,
	/// Physics constants; defaults when omitted.
	#[prop(optional)]
	config: Option<SimulationConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let engine = StoredValue::new_local(None::<GraphEngine>);
	let config = config.unwrap_or_default();
	// flips once the engine exists so the effects below load into it
	let attached = RwSignal::new(false);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if engine.with_value(Option::is_some) {
			return;
		}
		match GraphEngine::attach(Some(canvas), config.clone()) {
			Ok(graph_engine) => {
				engine.set_value(Some(graph_engine));
				attached.set(true);
			}
			Err(err) => error!("graph view unavailable: {err}"),
		}
	});

	Effect::new(move |_| {
		if !attached.get() {
			return;
		}
		let graph = data.get();
		engine.with_value(|slot| {
			if let Some(e) = slot {
				e.set_data(&graph);
			}
		});
	});

	Effect::new(move |_| {
		if !attached.get() {
			return;
		}
		let style = style_for(dark.get());
		engine.with_value(|slot| {
			if let Some(e) = slot {
				e.set_style(style);
			}
		});
	});

	on_cleanup(move || {
		engine.try_update_value(|slot| {
			if let Some(mut e) = slot.take() {
				e.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			style="display: block; width: 100%; height: 100%; cursor: grab;"
		/>
	}
}
