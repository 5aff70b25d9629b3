use crate::config::QuizConfig;
use crate::error::LoadError;
use crate::model::{AppState, Question};
use crate::session::QuizSession;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod loading;
pub mod view_models;

pub use crate::view_models::{Feedback, OptionMark, OptionView, QuestionView, ScoreSummary};

pub type LoadResult = Result<Vec<Question>, LoadError>;

/// Controlador: dueño de la sesión y de la máquina de estados de la UI.
pub struct QuizApp {
    pub config: QuizConfig,
    pub state: AppState,
    /// Banco completo tal y como se cargó; cada partida baraja una copia.
    pub questions: Vec<Question>,
    pub session: Option<QuizSession>,
    pub message: String,
    rng: StdRng,
    load_rx: Option<Receiver<LoadResult>>,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: QuizConfig, rng: StdRng) -> Self {
        Self {
            config,
            state: AppState::Loading,
            questions: Vec::new(),
            session: None,
            message: String::new(),
            rng,
            load_rx: None,
        }
    }

    /// Crea la app y lanza la carga de datos en segundo plano.
    pub fn launch(config: QuizConfig, ctx: &egui::Context) -> Self {
        let mut app = Self::new(config);
        app.begin_loading(ctx);
        app
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }
}
