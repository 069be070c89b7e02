//! Error types for deck compilation and publishing.

use std::fmt;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error reported by a renderer, kept opaque.
pub type RendererError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while compiling or publishing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// The lyrics were missing, empty, or contained no usable sections.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A style color was not a 6-digit hex string.
    #[error("Invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    /// The renderer rejected one of the publish stages.
    #[error("Renderer failed during {stage}: {source}")]
    RendererFailure {
        stage: RenderStage,
        #[source]
        source: RendererError,
    },
}

impl Error {
    pub(crate) fn invalid_color(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidColor { .. } => "INVALID_COLOR",
            Self::RendererFailure { .. } => "RENDERER_FAILURE",
        }
    }

    /// Whether the caller can fix this by sending different input.
    ///
    /// Integrating services map these to a 400-class status and everything
    /// else to a 5xx.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidColor { .. })
    }
}

/// The renderer call that was in flight when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    /// Creating the empty deck.
    CreateDeck,
    /// Applying the compiled operation batch.
    ApplyBatch,
    /// Granting link access to the deck.
    MakeShareable,
}

impl fmt::Display for RenderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateDeck => "create-deck",
            Self::ApplyBatch => "apply-batch",
            Self::MakeShareable => "make-shareable",
        };
        f.write_str(name)
    }
}
