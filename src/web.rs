use crate::{QuizApp, QuizConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Arranca la app sobre el `<canvas>` con id `canvas_id`.
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> Result<(), JsValue> {
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let canvas = document
        .get_element_by_id(&canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id {canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()?;

    let config = QuizConfig::from_env();
    log::info!("Starting quiz with data from {}", config.data_source);

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(QuizApp::launch(config, &cc.egui_ctx)))),
        )
        .await
}
