pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
pub use config::QuizConfig;
pub use error::{LoadError, SessionError};
pub use model::{AppState, Question, QuizOption};
pub use shuffle::shuffled;
