use crate::QuizApp;
use crate::ui::helpers::INCORRECT_COLOR;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

/// El área de la pregunta muestra el mensaje fijo; no hay opciones ni botones.
pub fn ui_load_failed(app: &mut QuizApp, ctx: &Context) {
    let view = app.question_view();
    centered_panel(ctx, 160.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&view.text).heading().color(INCORRECT_COLOR));
            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new(&app.message).small().weak());
            }
        });
    });
}
