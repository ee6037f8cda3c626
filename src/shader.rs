use std::fmt;

use tracing::{debug, error};

use crate::gl::GlApi;

/// Programmable pipeline stage a shader object is compiled for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
	Vertex,
	Fragment,
}

impl fmt::Display for ShaderStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ShaderStage::Vertex => f.write_str("vertex"),
			ShaderStage::Fragment => f.write_str("fragment"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShaderError {
	#[error("Unable to create {stage} shader: {reason}")]
	ShaderCreation { stage: ShaderStage, reason: String },
	#[error("Failed to compile {stage} shader: {log}")]
	Compile { stage: ShaderStage, log: String },
	#[error("Unable to create program: {0}")]
	ProgramCreation(String),
	#[error("Failed to link program: {0}")]
	Link(String),
}

/// Compiles a single shader stage from `source`.
///
/// On failure nothing is left allocated: a shader that fails to compile is deleted
/// before returning, and a failed creation never touches the driver again.
pub fn load_shader<G: GlApi>(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader, ShaderError> {
	debug!("Compiling {} shader", stage);

	let shader = match gl.create_shader(stage) {
		Ok(shader) => shader,
		Err(reason) => {
			error!("Unable to create {} shader: {}", stage, reason);
			return Err(ShaderError::ShaderCreation { stage, reason });
		}
	};

	gl.shader_source(shader, source);
	gl.compile_shader(shader);

	if gl.shader_compile_status(shader) {
		Ok(shader)
	} else {
		let log = gl.shader_info_log(shader);
		error!("Failed to compile {} shader: {}", stage, log);
		gl.delete_shader(shader);
		Err(ShaderError::Compile { stage, log })
	}
}
