use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("{dims}D simplex noise is not implemented")]
    Unsupported { dims: usize },

    #[error("invalid field parameter `{name}` = {value}: {reason}")]
    InvalidParam {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("failed to parse field parameters: {0}")]
    Json(#[from] serde_json::Error),
}
