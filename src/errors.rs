use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("no browser window available")]
    NoWindow,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("2d context unavailable")]
    ContextUnavailable,

    #[error("element is not a 2d canvas")]
    NotCanvas2d,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("value must be finite, got {0}")]
    NotFinite(f64),
}
