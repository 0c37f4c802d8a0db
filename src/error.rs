use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatError>;

#[derive(Error, Debug)]
pub enum HeatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] Box<image::ImageError>),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Unsupported output format for '{0}' (expected .svg, .png or .json)")]
    UnsupportedFormat(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl From<image::ImageError> for HeatError {
    fn from(err: image::ImageError) -> Self {
        HeatError::Image(Box::new(err))
    }
}
