// src/ui/helpers.rs
use crate::view_models::{Feedback, OptionMark, OptionView};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const CORRECT_COLOR: Color32 = Color32::from_rgb(0x2f, 0x85, 0x5a);
pub const INCORRECT_COLOR: Color32 = Color32::from_rgb(0xc5, 0x30, 0x30);

pub fn feedback_color(feedback: Feedback) -> Color32 {
    match feedback {
        Feedback::Correct => CORRECT_COLOR,
        Feedback::Incorrect => INCORRECT_COLOR,
    }
}

/// Botón de opción. Tras responder queda deshabilitado y coloreado
/// según `mark`. Devuelve true si se pulsó.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32) -> bool {
    let caption = RichText::new(&option.caption);
    let button = match option.mark {
        OptionMark::Neutral => Button::new(caption),
        OptionMark::Correct => {
            Button::new(caption.color(Color32::WHITE).strong()).fill(CORRECT_COLOR)
        }
        OptionMark::Incorrect => {
            Button::new(caption.color(Color32::WHITE).strong()).fill(INCORRECT_COLOR)
        }
    };
    ui.add_enabled(option.enabled, button.min_size(Vec2::new(width, 36.0)))
        .clicked()
}
