use crate::QuizApp;
use crate::ui::helpers::{feedback_color, option_button};
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let view = app.question_view();
    let mut picked: Option<String> = None;
    let mut next = false;

    centered_panel(ctx, 520.0, 650.0, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading(&view.number_label);
        });
        ui.add_space(10.0);

        // Enunciado con scroll fijo
        ScrollArea::vertical()
            .id_salt("question_text")
            .max_height(150.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&view.text).size(18.0));
            });
        ui.add_space(10.0);

        for option in &view.options {
            if option_button(ui, option, panel_width) {
                picked = Some(option.label.clone());
            }
            ui.add_space(4.0);
        }

        if let Some(feedback) = view.feedback {
            ui.add_space(8.0);
            ui.label(
                RichText::new(feedback.message())
                    .heading()
                    .strong()
                    .color(feedback_color(feedback)),
            );
        }

        if let Some(explanation) = &view.explanation {
            ui.add_space(5.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(panel_width);
                ui.label(explanation);
            });
        }

        if view.show_next {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                next = wide_button(ui, "Next question", panel_width / 2.0);
            });
        }
    });

    // Los eventos se despachan después de pintar el frame
    if let Some(label) = picked {
        app.select_answer(&label);
    }
    if next {
        app.next_question();
    }
}
