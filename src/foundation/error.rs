/// Convenience result type used across shotframe.
pub type ShotframeResult<T> = Result<T, ShotframeError>;

/// Top-level error taxonomy used by compositor and export APIs.
#[derive(thiserror::Error, Debug)]
pub enum ShotframeError {
    /// Output width or height outside the supported pixel range.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A color string that is not `#RRGGBB`.
    #[error("malformed color: {0}")]
    MalformedColor(String),

    /// Image bytes that could not be loaded or decoded.
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// Font registration, shaping, or measurement failures.
    #[error("font error: {0}")]
    Font(String),

    /// Failures while rasterizing or encoding a slide.
    #[error("render error: {0}")]
    Render(String),

    /// Invalid project configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotframeError {
    /// Build a [`ShotframeError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`ShotframeError::MalformedColor`] value.
    pub fn malformed_color(msg: impl Into<String>) -> Self {
        Self::MalformedColor(msg.into())
    }

    /// Build a [`ShotframeError::ImageDecode`] value.
    pub fn image_decode(msg: impl Into<String>) -> Self {
        Self::ImageDecode(msg.into())
    }

    /// Build a [`ShotframeError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`ShotframeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ShotframeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
