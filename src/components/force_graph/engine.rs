//! Binds a [`Simulation`] to a canvas and keeps it animating.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use super::canvas::CanvasSurface;
use super::config::{RenderStyle, SimulationConfig};
use super::error::GraphError;
use super::render::{self, Surface};
use super::state::Simulation;
use super::types::GraphData;

/// One loop iteration: physics, then draw.
pub fn advance_frame<S: Surface + ?Sized>(sim: &mut Simulation, surface: &mut S, style: &RenderStyle) {
	sim.step();
	render::render(sim, surface, style);
}

struct Shared {
	sim: Simulation,
	surface: CanvasSurface,
	style: RenderStyle,
}

struct Listener {
	target: EventTarget,
	kind: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running graph view.
///
/// Dropping the engine stops the frame loop and detaches its listeners.
pub struct GraphEngine {
	shared: Rc<RefCell<Shared>>,
	window: Window,
	cancelled: Rc<Cell<bool>>,
	pending_frame: Rc<Cell<Option<i32>>>,
	frame: FrameCallback,
	listeners: Vec<Listener>,
}

impl GraphEngine {
	/// Take over `canvas` and start animating. Fails fast without a canvas.
	pub fn attach(canvas: Option<HtmlCanvasElement>, config: SimulationConfig) -> Result<Self, GraphError> {
		let canvas = canvas.ok_or(GraphError::MissingCanvas)?;
		let window = web_sys::window().ok_or_else(|| GraphError::Host("no window".into()))?;
		let surface = CanvasSurface::new(canvas)?;
		let (width, height) = surface.fit_to_display();
		let sim = Simulation::new(config, width, height)?;
		info!("graph engine attached ({width}x{height})");

		let mut engine = Self {
			shared: Rc::new(RefCell::new(Shared {
				sim,
				surface,
				style: RenderStyle::default(),
			})),
			window,
			cancelled: Rc::new(Cell::new(false)),
			pending_frame: Rc::new(Cell::new(None)),
			frame: Rc::new(RefCell::new(None)),
			listeners: Vec::new(),
		};
		// on error the engine is dropped, which unwinds whatever was wired
		engine.bind_listeners()?;
		engine.start_loop()?;
		Ok(engine)
	}

	/// Replace the graph being shown.
	pub fn set_data(&self, data: &GraphData) {
		self.shared.borrow_mut().sim.load(data);
	}

	/// Switch palette from the next frame on.
	pub fn set_style(&self, style: RenderStyle) {
		self.shared.borrow_mut().style = style;
	}

	/// Cancel the pending frame and remove every listener. Idempotent.
	pub fn stop(&mut self) {
		if self.cancelled.replace(true) {
			return;
		}
		if let Some(id) = self.pending_frame.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		for listener in self.listeners.drain(..) {
			let _ = listener
				.target
				.remove_event_listener_with_callback(listener.kind, listener.callback.as_ref().unchecked_ref());
		}
		// the frame closure holds a handle to itself; dropping it breaks the cycle
		self.frame.borrow_mut().take();
		info!("graph engine stopped");
	}

	fn bind_listeners(&mut self) -> Result<(), GraphError> {
		let canvas: EventTarget = self.shared.borrow().surface.canvas().clone().into();
		let window: EventTarget = self.window.clone().into();

		let shared = self.shared.clone();
		self.listen(&canvas, "mousedown", move |ev| {
			let mut s = shared.borrow_mut();
			if let Some((x, y)) = pointer_position(s.surface.canvas(), &ev) {
				s.sim.pointer_down(x, y);
			}
		})?;

		let shared = self.shared.clone();
		self.listen(&canvas, "mousemove", move |ev| {
			let mut s = shared.borrow_mut();
			if let Some((x, y)) = pointer_position(s.surface.canvas(), &ev) {
				s.sim.pointer_move(x, y);
			}
		})?;

		// released anywhere, not just over the canvas
		let shared = self.shared.clone();
		self.listen(&window, "mouseup", move |_| shared.borrow_mut().sim.pointer_up())?;

		let shared = self.shared.clone();
		self.listen(&window, "resize", move |_| {
			let mut s = shared.borrow_mut();
			let (w, h) = s.surface.fit_to_display();
			s.sim.resize(w, h);
			debug!("graph surface resized to {w}x{h}");
		})?;
		Ok(())
	}

	fn listen(
		&mut self,
		target: &EventTarget,
		kind: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<(), GraphError> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
		self.listeners.push(Listener {
			target: target.clone(),
			kind,
			callback,
		});
		Ok(())
	}

	fn start_loop(&mut self) -> Result<(), GraphError> {
		let (shared, cancelled, pending) = (
			self.shared.clone(),
			self.cancelled.clone(),
			self.pending_frame.clone(),
		);
		let (frame, window) = (self.frame.clone(), self.window.clone());

		*self.frame.borrow_mut() = Some(Closure::new(move || {
			pending.set(None);
			if cancelled.get() {
				return;
			}
			if let Ok(mut s) = shared.try_borrow_mut() {
				let Shared { sim, surface, style } = &mut *s;
				advance_frame(sim, surface, style);
			}
			if let Some(cb) = frame.borrow().as_ref() {
				match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
					Ok(id) => pending.set(Some(id)),
					Err(err) => warn!("could not schedule graph frame: {err:?}"),
				}
			}
		}));

		let id = match self.frame.borrow().as_ref() {
			Some(cb) => self.window.request_animation_frame(cb.as_ref().unchecked_ref())?,
			None => return Ok(()),
		};
		self.pending_frame.set(Some(id));
		Ok(())
	}
}

impl Drop for GraphEngine {
	fn drop(&mut self) {
		self.stop();
	}
}

/// Pointer location in canvas pixels, for mouse events only.
fn pointer_position(canvas: &HtmlCanvasElement, ev: &Event) -> Option<(f64, f64)> {
	let ev = ev.dyn_ref::<MouseEvent>()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::render::tests::{Draw, RecordingSurface};
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	#[test]
	fn test_attach_without_canvas_fails_fast() {
		let attached = GraphEngine::attach(None, SimulationConfig::default());
		assert!(matches!(attached, Err(GraphError::MissingCanvas)));
		assert_eq!(GraphError::MissingCanvas.to_string(), "graph canvas is missing");
	}

	#[test]
	fn test_frame_steps_then_draws() {
		let mut sim = Simulation::with_seed(SimulationConfig::default(), 400.0, 400.0, 4).unwrap();
		sim.set_data(
			&[
				GraphNode::new("1", "A", "drug"),
				GraphNode::new("2", "B", "company"),
			],
			&[GraphLink::new("1", "2")],
		);
		let mut surface = RecordingSurface::default();

		advance_frame(&mut sim, &mut surface, &RenderStyle::light());

		let margin = sim.config().margin();
		for node in sim.nodes() {
			assert!(node.x >= margin && node.x <= 400.0 - margin);
		}
		let drawn: Vec<_> = surface
			.calls
			.iter()
			.filter_map(|c| match c {
				Draw::Circle(at, _) => Some(*at),
				_ => None,
			})
			.collect();
		let positions: Vec<_> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
		assert_eq!(drawn, positions);
	}

	#[test]
	fn test_independent_simulations_do_not_interfere() {
		let config = SimulationConfig::default();
		let mut a = Simulation::with_seed(config.clone(), 300.0, 300.0, 1).unwrap();
		let mut b = Simulation::with_seed(config, 300.0, 300.0, 1).unwrap();
		let nodes = [GraphNode::new("1", "A", "drug"), GraphNode::new("2", "B", "drug")];
		a.set_data(&nodes, &[]);
		b.set_data(&nodes, &[]);

		let held = (a.nodes()[0].x, a.nodes()[0].y);
		assert_eq!(a.pointer_down(held.0, held.1), Some(0));
		for _ in 0..10 {
			advance_frame(&mut a, &mut RecordingSurface::default(), &RenderStyle::light());
			advance_frame(&mut b, &mut RecordingSurface::default(), &RenderStyle::light());
		}
		assert!(b.dragging().is_none());
		assert_eq!(a.dragging().map(|n| (n.x, n.y)), Some(held));
		assert_ne!((b.nodes()[0].x, b.nodes()[0].y), held);
	}
}
