use thiserror::Error;

/// Failures surfaced while building or attaching a graph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
	/// No canvas element to draw into.
	#[error("graph canvas is missing")]
	MissingCanvas,

	/// The canvas refused to hand out a 2D context.
	#[error("canvas has no 2d rendering context")]
	ContextUnavailable,

	/// A tuning knob is outside its legal range.
	#[error("invalid simulation config: {field} = {value}")]
	InvalidConfig {
		/// Name of the offending knob.
		field: &'static str,
		/// The rejected value.
		value: f64,
	},

	/// A call into the host environment failed.
	#[error("host call failed: {0}")]
	Host(String),
}

impl From<wasm_bindgen::JsValue> for GraphError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		GraphError::Host(format!("{value:?}"))
	}
}
