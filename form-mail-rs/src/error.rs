use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormMailError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown metadata field: {0}")]
    UnknownMetaField(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

pub type Result<T> = std::result::Result<T, FormMailError>;
