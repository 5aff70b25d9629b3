mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultado de la carga (si ya llegó)
        self.poll_loading();

        // REINICIAR solo tiene sentido con una partida en marcha
        if matches!(self.state, AppState::Quiz) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state {
            AppState::Loading => views::loading::ui_loading(self, ctx),
            AppState::LoadFailed => views::failed::ui_load_failed(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }
    }
}
