//! Request, response, and plan types shared with callers.

use crate::error::Error;
use crate::ops::SlideOperation;
use crate::style::SlideStyleOverride;
use serde::{Deserialize, Serialize};

/// Title used when a request does not name its presentation.
pub const DEFAULT_PRESENTATION_TITLE: &str = "My Lyrics Presentation";

/// A request to turn lyrics into a shared presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Raw lyrics; verses separated by blank lines.
    #[serde(default)]
    pub lyrics: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<SlideStyleOverride>,
}

impl GenerateRequest {
    pub fn new(lyrics: impl Into<String>) -> Self {
        Self {
            lyrics: Some(lyrics.into()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.presentation_title = Some(title.into());
        self
    }

    pub fn with_style(mut self, style: SlideStyleOverride) -> Self {
        self.style = Some(style);
        self
    }

    /// The requested title, or the default when missing or blank.
    pub fn title(&self) -> &str {
        self.presentation_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PRESENTATION_TITLE)
    }
}

/// Successful result of publishing a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub presentation_url: String,
    pub slide_count: usize,
}

/// Error payload returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
            code: Some(err.code().to_string()),
        }
    }
}

/// The compiled operations for a whole deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckPlan {
    /// Every operation, in the order the renderer must apply them.
    pub batch: Vec<SlideOperation>,
    /// Number of slides the batch creates.
    pub slide_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_partial_style() {
        let req: GenerateRequest = serde_json::from_str(
            r##"{"lyrics":"A\n\nB","style":{"fontFamily":"Arial","backgroundColor":"#ffffff"}}"##,
        )
        .unwrap();

        assert_eq!(req.lyrics.as_deref(), Some("A\n\nB"));
        let style = req.style.unwrap();
        assert_eq!(style.font_family.as_deref(), Some("Arial"));
        assert_eq!(style.font_size, None);
    }

    #[test]
    fn test_request_without_lyrics() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.lyrics.is_none());
    }

    #[test]
    fn test_title_defaults() {
        assert_eq!(GenerateRequest::new("x").title(), DEFAULT_PRESENTATION_TITLE);
        assert_eq!(
            GenerateRequest::new("x").with_title("   ").title(),
            DEFAULT_PRESENTATION_TITLE
        );
        assert_eq!(
            GenerateRequest::new("x").with_title(" Amazing Grace ").title(),
            "Amazing Grace"
        );
    }

    #[test]
    fn test_response_is_camel_case() {
        let resp = GenerateResponse {
            presentation_url: "https://example.com/d/1".to_string(),
            slide_count: 3,
        };
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"presentationUrl":"https://example.com/d/1","slideCount":3}"#
        );
    }

    #[test]
    fn test_error_response_from_error() {
        let err = Error::InvalidInput("lyrics required".to_string());
        let payload = ErrorResponse::from(&err);
        assert_eq!(payload.error, "Invalid input: lyrics required");
        assert_eq!(payload.code.as_deref(), Some("INVALID_INPUT"));
    }
}
