use thiserror::Error;

/// Cualquier fallo al obtener o interpretar el banco de preguntas.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed quiz data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid question #{index}: {reason}")]
    Invalid { index: usize, reason: String },
    #[error("The quiz data contains no questions")]
    Empty,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Http {
                status: status.as_u16(),
            },
            None => LoadError::Network(err.to_string()),
        }
    }
}

/// Transición pedida fuera de su fase.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no question is waiting for an answer")]
    NotPresenting,
    #[error("the current question has not been answered yet")]
    NotAnswered,
}
