use super::*;
use crate::session::Phase;
use crate::view_models::NO_OPTIONS_MESSAGE;

impl QuizApp {
    /// Lo que debe pintarse en el área de la pregunta según el estado actual.
    pub fn question_view(&self) -> QuestionView {
        if self.state == AppState::LoadFailed {
            return QuestionView::load_failed();
        }
        let Some(session) = self.session.as_ref() else {
            return QuestionView::default();
        };
        let Some(question) = session.current() else {
            return QuestionView::default();
        };

        let answered = match session.phase() {
            Phase::Answered { selected, correct } => Some((selected.as_str(), *correct)),
            _ => None,
        };

        let options = question
            .options
            .iter()
            .map(|opt| {
                let mark = match answered {
                    Some(_) if question.is_correct(&opt.label) => OptionMark::Correct,
                    Some((selected, false)) if selected == opt.label => OptionMark::Incorrect,
                    _ => OptionMark::Neutral,
                };
                OptionView {
                    label: opt.label.clone(),
                    caption: format!("{}. {}", opt.label, opt.text),
                    enabled: answered.is_none(),
                    mark,
                }
            })
            .collect();

        let feedback = answered.map(|(_, correct)| {
            if correct {
                Feedback::Correct
            } else {
                Feedback::Incorrect
            }
        });

        let explanation = if answered.is_some() {
            Some(question.explanation.clone())
        } else if !question.has_options() {
            Some(NO_OPTIONS_MESSAGE.to_string())
        } else {
            None
        };

        QuestionView {
            number_label: format!(
                "Question {} of {}",
                session.current_index() + 1,
                session.total()
            ),
            text: question.text.clone(),
            options,
            feedback,
            explanation,
            show_next: answered.is_some() || !question.has_options(),
        }
    }

    pub fn score_summary(&self) -> Option<ScoreSummary> {
        let session = self.session.as_ref()?;
        session.is_finished().then(|| ScoreSummary {
            score: session.score(),
            total: session.total(),
        })
    }
}
