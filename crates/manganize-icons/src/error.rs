//! Error types for icon loading and markup inspection.

use std::path::PathBuf;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or inspecting icons.
///
/// Resolving an icon by name never fails; these errors only come from
/// reading icon sets from disk and parsing their markup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read icon data '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Markup is not a usable SVG document.
    #[error("Invalid icon markup: {message}")]
    Markup { message: String },

    /// The `viewBox` attribute could not be parsed.
    #[error("Invalid viewBox '{value}'")]
    InvalidViewBox { value: String },

    /// Icon name rejected.
    #[error("Invalid icon name '{name}': {message}")]
    InvalidName { name: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a markup error.
    pub fn markup(message: impl Into<String>) -> Self {
        Self::Markup {
            message: message.into(),
        }
    }

    /// Create a viewBox error.
    pub fn invalid_view_box(value: impl Into<String>) -> Self {
        Self::InvalidViewBox {
            value: value.into(),
        }
    }

    /// Create a name error.
    pub fn invalid_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            message: message.into(),
        }
    }
}
