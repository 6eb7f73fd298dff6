use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Style error: {0}")]
    Style(#[from] xcss::XcssError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A logger was already installed")]
    LoggerAlreadySet,
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, SiteError>;
