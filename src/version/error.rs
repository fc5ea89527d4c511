use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed is not valid {encoding}")]
    Encoding { encoding: &'static str },

    #[error("Invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid release date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
