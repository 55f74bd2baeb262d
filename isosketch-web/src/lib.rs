/// isosketch web - runs a sketch on an HTML canvas
///
/// The page owns the animation loop: it calls `update(dt)` then `render()` on a
/// `WebSketch` every frame.

use isosketch_core::{build_sketch, IsoError, Sketch, SketchConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub mod surface;

pub use surface::CanvasSurface;

fn to_js_error(err: IsoError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WebSketch {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    sketch: Box<dyn Sketch>,
}

#[wasm_bindgen]
impl WebSketch {
    /// Attach the sketch named by `descriptor` to the canvas with id `canvas_id`
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, descriptor: &str) -> Result<WebSketch, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id:?}")))?
            .dyn_into::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = SketchConfig::parse(descriptor).map_err(to_js_error)?;
        let sketch = build_sketch(&config).map_err(to_js_error)?;
        log::info!("attached {} sketch to #{canvas_id}", config.kind().name());

        Ok(WebSketch {
            canvas,
            surface: CanvasSurface::new(context),
            sketch,
        })
    }

    /// Advance the animation by `dt` seconds
    pub fn update(&mut self, dt: f64) {
        self.sketch.update(dt);
    }

    /// Clear the canvas and draw the current frame centered on it
    pub fn render(&mut self) -> Result<(), JsValue> {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        let context = self.surface.context();
        context.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        context.clear_rect(0.0, 0.0, width, height);
        context.translate(width / 2.0, height / 2.0)?;

        self.sketch.render(&mut self.surface);
        Ok(())
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // A second module instance finds the logger already installed
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already initialized");
    }
    Ok(())
}
