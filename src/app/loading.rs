use super::*;
use std::sync::mpsc::{self, TryRecvError};

impl QuizApp {
    pub fn begin_loading(&mut self, ctx: &egui::Context) {
        if self.load_rx.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel::<LoadResult>();
        self.load_rx = Some(rx);
        self.state = AppState::Loading;
        self.message = format!("Loading {}...", self.config.data_source);

        let source = self.config.data_source.clone();
        let ctx = ctx.clone();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = crate::data::load_questions(&source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::data::fetch_questions(&source).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    pub fn is_loading(&self) -> bool {
        self.load_rx.is_some()
    }

    /// Se llama en cada frame; aplica el resultado cuando llega.
    pub fn poll_loading(&mut self) {
        let received = match self.load_rx.as_ref().map(|rx| rx.try_recv()) {
            None | Some(Err(TryRecvError::Empty)) => return,
            Some(Ok(result)) => result,
            Some(Err(TryRecvError::Disconnected)) => Err(LoadError::Network(
                "loader stopped before returning a result".into(),
            )),
        };
        self.load_rx = None;
        self.finish_loading(received);
    }

    pub fn finish_loading(&mut self, result: LoadResult) {
        match result {
            Ok(questions) => {
                log::info!(
                    "Loaded {} questions from {}",
                    questions.len(),
                    self.config.data_source
                );
                self.questions = questions;
                self.message.clear();
                self.start_game();
            }
            Err(err) => {
                log::error!("Failed to load quiz data: {err}");
                self.questions.clear();
                self.session = None;
                self.message = err.to_string();
                self.state = AppState::LoadFailed;
            }
        }
    }
}
