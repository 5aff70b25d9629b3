// src/data.rs

use crate::error::LoadError;
use crate::model::Question;

/// Interpreta el documento JSON y valida cada pregunta.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }
    for (i, q) in questions.iter().enumerate() {
        q.validate().map_err(|reason| LoadError::Invalid {
            index: i + 1,
            reason,
        })?;
    }
    Ok(questions)
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Carga bloqueante: fichero local o URL. Pensada para un hilo aparte.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_questions(source: &str) -> Result<Vec<Question>, LoadError> {
    let body = if is_remote(source) {
        let response = reqwest::blocking::Client::new()
            .get(source)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        if !response.status().is_success() {
            return Err(LoadError::Http {
                status: response.status().as_u16(),
            });
        }
        response.text()?
    } else {
        std::fs::read_to_string(source)?
    };
    parse_questions(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(source: &str) -> Result<Vec<Question>, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(if is_remote(source) {
        RequestMode::Cors
    } else {
        RequestMode::SameOrigin
    });

    let request = Request::new_with_str_and_init(source, &opts)
        .map_err(|err| LoadError::Network(format!("{err:?}")))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| LoadError::Network(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Network("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
        });
    }

    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(err) => Err(err),
    }
    .map_err(|err| LoadError::Network(format!("{err:?}")))?;
    let text = text
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".into()))?;

    parse_questions(&text)
}
