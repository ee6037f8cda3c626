use std::fmt;

use tracing::info;

use crate::gl::GlApi;

/// Target of the diagnostic event emitted by [`acquire_context`].
pub const DIAGNOSTIC_TARGET: &str = "glinit::diagnostics";

/// Kind of rendering context requested from a [`Surface`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContextKind {
	#[default]
	WebGl,
}

impl ContextKind {
	/// Identifier a canvas expects, e.g. `"webgl"`.
	pub fn as_str(self) -> &'static str {
		match self {
			ContextKind::WebGl => "webgl",
		}
	}
}

impl fmt::Display for ContextKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
	#[error("Surface does not support a {0} context")]
	Unavailable(ContextKind),
}

/// Something that can hand out a rendering context, typically a canvas.
pub trait Surface {
	type Gl: GlApi;

	/// Returns `None` if the surface cannot produce a context of this kind.
	fn request_context(&self, kind: ContextKind) -> Option<Self::Gl>;
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl Surface for web_sys::HtmlCanvasElement {
	type Gl = glow::Context;

	fn request_context(&self, kind: ContextKind) -> Option<glow::Context> {
		use wasm_bindgen::JsCast;

		let context = self.get_context(kind.as_str()).ok()??;
		let webgl = context.dyn_into::<web_sys::WebGlRenderingContext>().ok()?;
		Some(glow::Context::from_webgl1_context(webgl))
	}
}

/// A graphics API handle plus the program last made current through it.
pub struct RenderingContext<G: GlApi> {
	gl: G,
	program: Option<G::Program>,
}

impl<G: GlApi> RenderingContext<G> {
	/// Wraps an already created API handle. No program is current yet.
	pub fn new(gl: G) -> Self {
		Self { gl, program: None }
	}

	#[inline]
	pub fn gl(&self) -> &G {
		&self.gl
	}

	/// Program installed by the last successful [`init_shaders`](crate::init_shaders) call.
	#[inline]
	pub fn program(&self) -> Option<G::Program> {
		self.program
	}

	/// Activates `program` and records it as current.
	pub(crate) fn set_program(&mut self, program: G::Program) {
		self.gl.use_program(Some(program));
		self.program = Some(program);
	}

	pub fn into_inner(self) -> G {
		self.gl
	}
}

impl<G: GlApi> fmt::Debug for RenderingContext<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RenderingContext")
			.field("gl", &self.gl)
			.field("program", &self.program)
			.finish()
	}
}

/// Requests a WebGL context from `surface`.
///
/// With `debug` set, the outcome is reported once on [`DIAGNOSTIC_TARGET`],
/// whether or not a context was obtained.
pub fn acquire_context<S: Surface>(surface: &S, debug: bool) -> Result<RenderingContext<S::Gl>, ContextError> {
	let kind = ContextKind::WebGl;
	let context = surface.request_context(kind).map(RenderingContext::new);

	if debug {
		info!(target: DIAGNOSTIC_TARGET, %kind, ?context, "acquire rendering context");
	}

	context.ok_or(ContextError::Unavailable(kind))
}
