#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use quiz_widget::{QuizApp, QuizConfig};

    pretty_env_logger::init();

    let config = QuizConfig::from_env();
    log::info!("Starting quiz with data from {}", config.data_source);

    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::launch(config, &cc.egui_ctx)))),
    )
}

// En web el punto de entrada es `start` (src/web.rs)
#[cfg(target_arch = "wasm32")]
fn main() {}
