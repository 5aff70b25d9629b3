use super::*;

impl QuizApp {
    /// Nueva partida: baraja el banco completo y presenta la primera pregunta.
    pub fn start_game(&mut self) {
        let session = QuizSession::start(&self.questions, &mut self.rng);
        self.state = if session.is_finished() {
            AppState::Summary
        } else {
            AppState::Quiz
        };
        self.session = Some(session);
    }

    /// Click en una opción.
    pub fn select_answer(&mut self, label: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(err) = session.select_answer(label) {
            log::debug!("Ignored answer {label}: {err}");
        }
    }

    /// Click en "Siguiente".
    pub fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(err) = session.advance() {
            log::debug!("Ignored next: {err}");
            return;
        }
        if session.is_finished() {
            log::info!("Quiz finished: {} / {}", session.score(), session.total());
            self.state = AppState::Summary;
        }
    }

    /// Click en "Reintentar". Sin datos cargados no hay nada que reiniciar.
    pub fn retry(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.retry(&mut self.rng);
        self.state = if session.is_finished() {
            AppState::Summary
        } else {
            AppState::Quiz
        };
    }
}
