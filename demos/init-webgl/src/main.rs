const VERTEX_SHADER: &str = r#"
attribute vec4 a_Position;
void main() {
	gl_Position = a_Position;
	gl_PointSize = 10.0;
}
"#;

const FRAGMENT_SHADER: &str = r#"
precision mediump float;
void main() {
	gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);
}
"#;

#[cfg(target_arch = "wasm32")]
fn create_canvas() -> Result<web_sys::HtmlCanvasElement, Box<dyn std::error::Error>> {
	use wasm_bindgen::JsCast;

	let document = web_sys::window()
		.and_then(|win| win.document())
		.ok_or("no document to attach a canvas to")?;
	let body = document.body().ok_or("document has no body")?;

	let canvas = document
		.create_element("canvas")
		.map_err(|e| format!("{e:?}"))?
		.dyn_into::<web_sys::HtmlCanvasElement>()
		.map_err(|_| "created element is not a canvas")?;
	canvas.set_id("canvas");
	canvas.set_width(640);
	canvas.set_height(480);
	body.append_child(&canvas).map_err(|e| format!("{e:?}"))?;

	Ok(canvas)
}

#[cfg(target_arch = "wasm32")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
	use tracing::info;

	let canvas = create_canvas()?;

	let mut ctx = glinit::acquire_context(&canvas, true)?;
	let program = glinit::init_shaders(&mut ctx, VERTEX_SHADER, FRAGMENT_SHADER)?;
	info!("Program {:?} is current", program);

	Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
	console_error_panic_hook::set_once();
	tracing_wasm::set_as_global_default();

	match run() {
		Ok(_) => tracing::info!("Shaders initialized"),
		Err(e) => tracing::error!("Fatal crash: {}", e),
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
	let _ = (VERTEX_SHADER, FRAGMENT_SHADER);
	panic!("This is a WASM demo. You need to build it for the WASM target.");
}
