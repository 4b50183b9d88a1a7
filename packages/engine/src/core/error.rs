use thiserror::Error;

/// Everything that can go wrong in the footer engine.
///
/// None of these are fatal for the page: the worst outcome is a blank or
/// frozen footer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FooterError {
    #[error("frame rate must be between {min} and {max} generations/second, got {requested}")]
    FrameRateOutOfRange { requested: f64, min: f64, max: f64 },

    #[error("invalid footer config: {0}")]
    InvalidConfig(String),

    #[error("could not parse footer config: {0}")]
    ConfigParse(String),

    #[error("drawing surface unavailable: {0}")]
    SurfaceMissing(String),

    #[error("browser API unavailable: {0}")]
    Browser(String),
}

pub type FooterResult<T> = Result<T, FooterError>;
