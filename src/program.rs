use tracing::{debug, error};

use crate::context::RenderingContext;
use crate::gl::GlApi;
use crate::shader::{load_shader, ShaderError, ShaderStage};

/// Compiles both stages and links them into a program.
///
/// Both stages are always compiled, so every compiler diagnostic gets logged, but
/// the vertex error wins when both fail. No program object is created unless both
/// stages compiled. On success the shaders stay attached to the returned program.
pub fn create_program<G: GlApi>(gl: &G, vertex: &str, fragment: &str) -> Result<G::Program, ShaderError> {
	let vertex_shader = load_shader(gl, ShaderStage::Vertex, vertex);
	let fragment_shader = load_shader(gl, ShaderStage::Fragment, fragment);

	let (vertex_shader, fragment_shader) = match (vertex_shader, fragment_shader) {
		(Ok(vs), Ok(fs)) => (vs, fs),
		(Err(err), Ok(fs)) => {
			gl.delete_shader(fs);
			return Err(err);
		}
		(Ok(vs), Err(err)) => {
			gl.delete_shader(vs);
			return Err(err);
		}
		(Err(err), Err(_)) => return Err(err),
	};

	let program = match gl.create_program() {
		Ok(program) => program,
		Err(reason) => {
			error!("Unable to create program: {}", reason);
			gl.delete_shader(fragment_shader);
			gl.delete_shader(vertex_shader);
			return Err(ShaderError::ProgramCreation(reason));
		}
	};

	gl.attach_shader(program, vertex_shader);
	gl.attach_shader(program, fragment_shader);

	debug!("Linking program {:?}", program);
	gl.link_program(program);

	if gl.program_link_status(program) {
		Ok(program)
	} else {
		let log = gl.program_info_log(program);
		error!("Failed to link program: {}", log);
		gl.delete_program(program);
		gl.delete_shader(fragment_shader);
		gl.delete_shader(vertex_shader);
		Err(ShaderError::Link(log))
	}
}

/// Builds a program from `vertex` and `fragment`, makes it active on `ctx` and records it
/// as the context's current program.
///
/// The current program is left untouched on failure.
pub fn init_shaders<G: GlApi>(
	ctx: &mut RenderingContext<G>,
	vertex: &str,
	fragment: &str,
) -> Result<G::Program, ShaderError> {
	let program = match create_program(ctx.gl(), vertex, fragment) {
		Ok(program) => program,
		Err(err) => {
			error!("Failed to create program");
			return Err(err);
		}
	};

	debug!("Activating program {:?}", program);
	ctx.set_program(program);
	Ok(program)
}
