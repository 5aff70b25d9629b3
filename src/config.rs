pub const DEFAULT_DATA_SOURCE: &str = "computer_network.json";
pub const DEFAULT_WINDOW_TITLE: &str = "Network Quiz";
#[cfg(not(target_arch = "wasm32"))]
const DATA_SOURCE_ENV: &str = "QUIZ_DATA_SOURCE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Ruta local o URL `http(s)://` en nativo; URL relativa o absoluta en web.
    pub data_source: String,
    pub window_title: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl QuizConfig {
    pub fn with_data_source(source: impl Into<String>) -> Self {
        Self {
            data_source: source.into(),
            ..Self::default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::with_data_source(resolve_source(std::env::var(DATA_SOURCE_ENV).ok()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let data_source = source_from_build_env()
            .or_else(source_from_querystring)
            .or_else(source_from_meta)
            .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());
        Self::with_data_source(data_source)
    }
}

/// Valor de la variable de entorno, o el fichero por defecto si falta o está vacío.
#[cfg(not(target_arch = "wasm32"))]
fn resolve_source(var: Option<String>) -> String {
    var.as_deref()
        .and_then(normalize_source)
        .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string())
}

fn normalize_source(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn source_from_build_env() -> Option<String> {
    option_env!("QUIZ_DATA_SOURCE").and_then(normalize_source)
}

#[cfg(target_arch = "wasm32")]
fn source_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "data" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            return normalize_source(&decoded.as_string()?);
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
fn source_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='quiz-data-source']")
        .ok()??;
    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_source)
}
