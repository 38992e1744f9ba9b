use thiserror::Error;

/// shelf 統一エラー型
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Unknown overlay: {0}. Expected one of: search, settings, book-detail")]
    UnknownOverlay(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("HOME environment variable not set")]
    HomeNotSet,
}

pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_overlay_message_lists_choices() {
        let err = ShelfError::UnknownOverlay("sidebar".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown overlay: sidebar. Expected one of: search, settings, book-detail"
        );
    }

    #[test]
    fn dataset_error_message() {
        let err = ShelfError::InvalidDataset("duplicate book id: b1".to_string());
        assert_eq!(err.to_string(), "Invalid dataset: duplicate book id: b1");
    }
}
