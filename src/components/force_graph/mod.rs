//! Force-directed relationship graph: simulation, pointer dragging,
//! rendering and the frame loop that ties them to a canvas.

mod canvas;
mod component;
pub mod config;
mod engine;
pub mod error;
mod interaction;
mod physics;
mod render;
mod state;
mod types;

pub use canvas::CanvasSurface;
pub use component::ForceGraphCanvas;
pub use config::{RenderStyle, SimulationConfig};
pub use engine::{GraphEngine, advance_frame};
pub use error::GraphError;
pub use interaction::DragState;
pub use physics::{repulsion, spring};
pub use render::{Surface, render};
pub use state::{SimEdge, SimNode, Simulation};
pub use types::{GraphData, GraphLink, GraphNode, NodeGroup};
