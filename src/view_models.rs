// src/view_models.rs

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load the quiz. Please reload the page.";
pub const NO_OPTIONS_MESSAGE: &str = "This question has no options to choose from.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::Correct => "Correct!",
            Feedback::Incorrect => "Incorrect...",
        }
    }
}

#[derive(Clone, Debug)]
pub struct OptionView {
    pub label: String,
    pub caption: String, // "A. texto"
    pub enabled: bool,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, Default)]
pub struct QuestionView {
    pub number_label: String,
    pub text: String,
    pub options: Vec<OptionView>,
    pub feedback: Option<Feedback>,
    pub explanation: Option<String>,
    pub show_next: bool,
}

impl QuestionView {
    /// Vista de error: solo el mensaje fijo, sin opciones ni botones.
    pub fn load_failed() -> Self {
        Self {
            text: LOAD_FAILED_MESSAGE.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
}

impl ScoreSummary {
    pub fn text(&self) -> String {
        format!("Your score: {} of {} correct!", self.score, self.total)
    }
}
