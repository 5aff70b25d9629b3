use crate::error::SessionError;
use crate::model::Question;
use crate::shuffle::shuffled;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Presenting,
    Answered { selected: String, correct: bool },
    Finished,
}

/// Una partida: preguntas barajadas, índice actual y aciertos.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    phase: Phase,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(all: &[Question], rng: &mut R) -> Self {
        let questions = shuffled(all, rng);
        let phase = if questions.is_empty() {
            Phase::Finished
        } else {
            Phase::Presenting
        };
        log::debug!("New session with {} questions", questions.len());
        Self {
            questions,
            current_index: 0,
            score: 0,
            phase,
        }
    }

    /// Igual que `start`, reutilizando el mismo conjunto de preguntas.
    pub fn retry<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::start(&self.questions, rng);
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn current(&self) -> Option<&Question> {
        match self.phase {
            Phase::Finished => None,
            _ => self.questions.get(self.current_index),
        }
    }

    /// Devuelve si la respuesta era correcta. Solo vale en `Presenting`,
    /// así que una segunda selección sobre la misma pregunta no puntúa.
    pub fn select_answer(&mut self, label: &str) -> Result<bool, SessionError> {
        if self.phase != Phase::Presenting {
            return Err(SessionError::NotPresenting);
        }
        let question = self
            .questions
            .get(self.current_index)
            .ok_or(SessionError::NotPresenting)?;
        if !question.has_options() {
            return Err(SessionError::NotPresenting);
        }

        let correct = question.is_correct(label);
        if correct {
            self.score += 1;
        }
        self.phase = Phase::Answered {
            selected: label.to_owned(),
            correct,
        };
        log::debug!(
            "Question {} answered with {label} ({})",
            self.current_index + 1,
            if correct { "correct" } else { "incorrect" }
        );
        Ok(correct)
    }

    /// Pasa a la siguiente pregunta o a `Finished`. Una pregunta sin
    /// opciones no se puede contestar, así que se permite saltarla.
    pub fn advance(&mut self) -> Result<&Phase, SessionError> {
        let skippable =
            self.phase == Phase::Presenting && self.current().is_some_and(|q| !q.has_options());
        if !matches!(self.phase, Phase::Answered { .. }) && !skippable {
            return Err(SessionError::NotAnswered);
        }

        self.current_index += 1;
        self.phase = if self.current_index < self.questions.len() {
            Phase::Presenting
        } else {
            Phase::Finished
        };
        Ok(&self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizOption;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(text: &str, answer: &str) -> Question {
        Question {
            text: text.into(),
            options: ["A", "B", "C", "D"]
                .iter()
                .map(|l| QuizOption {
                    label: (*l).into(),
                    text: format!("option {l}"),
                })
                .collect(),
            correct_label: answer.into(),
            explanation: format!("{text} explained"),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn start_resets_index_and_score() {
        let all = vec![question("q1", "A"), question("q2", "B"), question("q3", "C")];
        let session = QuizSession::start(&all, &mut rng());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total(), 3);
        assert_eq!(session.phase(), &Phase::Presenting);
    }

    #[test]
    fn correct_answer_increments_score_once() {
        let all = vec![question("q1", "B")];
        let mut session = QuizSession::start(&all, &mut rng());

        assert_eq!(session.select_answer("B"), Ok(true));
        assert_eq!(session.score(), 1);
        assert_eq!(session.select_answer("B"), Err(SessionError::NotPresenting));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn wrong_answer_keeps_score() {
        let all = vec![question("q1", "B")];
        let mut session = QuizSession::start(&all, &mut rng());
        assert_eq!(session.select_answer("D"), Ok(false));
        assert_eq!(session.score(), 0);
        assert_eq!(
            session.phase(),
            &Phase::Answered {
                selected: "D".into(),
                correct: false
            }
        );
    }

    #[test]
    fn advance_requires_an_answer() {
        let all = vec![question("q1", "A"), question("q2", "A")];
        let mut session = QuizSession::start(&all, &mut rng());
        assert_eq!(session.advance().unwrap_err(), SessionError::NotAnswered);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn two_question_game_ends_with_one_point() {
        let all = vec![question("q1", "B"), question("q2", "C")];
        let mut session = QuizSession::start(&all, &mut rng());

        for _ in 0..2 {
            let current = session.current().expect("question presented").clone();
            let pick = if current.text == "q1" { "B" } else { "A" };
            session.select_answer(pick).expect("presenting");
            session.advance().expect("answered");
        }

        assert!(session.is_finished());
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), 2);
        assert!(session.current().is_none());
        assert_eq!(session.select_answer("A"), Err(SessionError::NotPresenting));
    }

    #[test]
    fn retry_reshuffles_every_question_and_zeroes_score() {
        let all: Vec<Question> = (0..6).map(|i| question(&format!("q{i}"), "A")).collect();
        let mut rng = rng();
        let mut session = QuizSession::start(&all, &mut rng);
        while !session.is_finished() {
            session.select_answer("A").unwrap();
            session.advance().unwrap();
        }
        assert_eq!(session.score(), 6);

        session.retry(&mut rng);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), &Phase::Presenting);

        let mut texts: Vec<&str> = session.questions().iter().map(|q| q.text.as_str()).collect();
        texts.sort_unstable();
        assert_eq!(texts, vec!["q0", "q1", "q2", "q3", "q4", "q5"]);
    }

    #[test]
    fn question_without_options_can_be_skipped_but_not_answered() {
        let empty = Question {
            text: "no choices".into(),
            options: vec![],
            correct_label: "A".into(),
            explanation: String::new(),
        };
        let mut session = QuizSession::start(&[empty], &mut rng());
        assert_eq!(session.select_answer("A"), Err(SessionError::NotPresenting));
        assert_eq!(session.advance(), Ok(&Phase::Finished));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn empty_question_set_starts_finished() {
        let session = QuizSession::start(&[], &mut rng());
        assert!(session.is_finished());
        assert_eq!(session.total(), 0);
    }
}
