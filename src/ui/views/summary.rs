use crate::QuizApp;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Context, RichText};

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    let Some(summary) = app.score_summary() else {
        return;
    };
    let mut retry = false;

    centered_panel(ctx, 220.0, 400.0, |ui| {
        let button_width = ui.available_width() / 2.0;
        ui.vertical_centered(|ui| {
            ui.heading("Quiz finished!");
            ui.add_space(10.0);
            ui.label(RichText::new(summary.text()).size(20.0).strong());
            ui.add_space(20.0);
            retry = wide_button(ui, "Retry", button_width);
        });
    });

    if retry {
        app.retry();
    }
}
