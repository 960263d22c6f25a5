use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font stream is empty")]
    EmptyFont,
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("unexpected end of font while reading {0}")]
    UnexpectedEndOfFont(String),
    #[error("invalid code tag: {0:?}")]
    InvalidCodeTag(String),
    #[error("font not found: {name}")]
    FontNotFound {
        name: String,
        #[source]
        cause: Option<Box<FontError>>,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Archive(String),
}

impl FontError {
    #[cfg(feature = "bundled")]
    pub(crate) fn not_found(name: &str) -> Self {
        FontError::FontNotFound {
            name: name.to_string(),
            cause: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FontError>;
