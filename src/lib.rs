//! Thin helpers to get a shader program running on a GL context.
//!
//! The usual sequence is [`acquire_context`] on a display surface, then
//! [`init_shaders`] with a vertex and a fragment source. [`create_program`] and
//! [`load_shader`] are the building blocks underneath and can be used on their own.

pub mod context;
pub mod gl;
pub mod program;
pub mod shader;


pub use context::{acquire_context, ContextError, ContextKind, RenderingContext, Surface, DIAGNOSTIC_TARGET};
pub use gl::GlApi;
pub use program::{create_program, init_shaders};
pub use shader::{load_shader, ShaderError, ShaderStage};

/// Any failure of the acquire-compile-link-activate chain.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Context(#[from] ContextError),
	#[error(transparent)]
	Shader(#[from] ShaderError),
}
