use serde::{Deserialize, Serialize};

/// Una opción seleccionable: etiqueta ("A".."D") y texto.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub label: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
    #[serde(rename = "answer")]
    pub correct_label: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, label: &str) -> bool {
        self.correct_label == label
    }

    pub fn option(&self, label: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.label == label)
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Etiquetas únicas y, si hay opciones, exactamente una coincide con la respuesta.
    pub fn validate(&self) -> Result<(), String> {
        for (i, opt) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.label == opt.label) {
                return Err(format!("duplicate option label \"{}\"", opt.label));
            }
        }
        if self.has_options() && self.option(&self.correct_label).is_none() {
            return Err(format!(
                "answer \"{}\" does not match any option",
                self.correct_label
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Loading,
    LoadFailed,
    Quiz,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(label: &str, text: &str) -> QuizOption {
        QuizOption {
            label: label.into(),
            text: text.into(),
        }
    }

    #[test]
    fn deserializes_the_json_field_names() {
        let json = r#"{
            "question": "Which layer routes packets?",
            "options": [{"label": "A", "text": "Transport"}, {"label": "B", "text": "Network"}],
            "answer": "B",
            "explanation": "Routing happens at layer 3."
        }"#;
        let q: Question = serde_json::from_str(json).expect("valid question");
        assert_eq!(q.text, "Which layer routes packets?");
        assert_eq!(q.correct_label, "B");
        assert_eq!(q.options.len(), 2);
        assert!(q.is_correct("B"));
        assert!(!q.is_correct("A"));
        assert!(q.validate().is_ok());
    }

    #[test]
    fn validate_rejects_answer_without_option() {
        let q = Question {
            text: "?".into(),
            options: vec![opt("A", "x"), opt("B", "y")],
            correct_label: "C".into(),
            explanation: String::new(),
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_labels() {
        let q = Question {
            text: "?".into(),
            options: vec![opt("A", "x"), opt("A", "y")],
            correct_label: "A".into(),
            explanation: String::new(),
        };
        let err = q.validate().unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn validate_accepts_question_without_options() {
        let q = Question {
            text: "Nothing to pick".into(),
            options: vec![],
            correct_label: "A".into(),
            explanation: String::new(),
        };
        assert!(q.validate().is_ok());
        assert!(!q.has_options());
    }
}
