//! Slide styling preferences and the override merge.

use crate::color::{hex_to_rgb, RgbColor};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Font families offered by the front-end style picker.
///
/// Not enforced: any family name is passed through to the renderer.
pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Roboto",
    "Montserrat",
    "Open Sans",
    "Lato",
    "Georgia",
    "Times New Roman",
];

/// Fully-populated visual style applied to every slide of a deck.
///
/// Empty strings in the text fields mean "not set": the planner then leaves
/// that attribute to the renderer's default. Blank but non-empty colors are
/// still converted, and fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideStyle {
    pub font_family: String,
    /// Preferred size in points.
    pub font_size: f64,
    pub background_color: String,
    pub font_color: String,
    pub is_auto_fit: bool,
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_centered: bool,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 24.0,
            background_color: "#ffffff".to_string(),
            font_color: "#000000".to_string(),
            is_auto_fit: true,
            is_bold: false,
            is_italic: false,
            is_centered: false,
        }
    }
}

impl SlideStyle {
    /// The profile the web client starts from: bold, centered serif text.
    pub fn worship() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            is_bold: true,
            is_centered: true,
            ..Self::default()
        }
    }

    /// Font family to request, if one is set.
    pub fn font_family(&self) -> Option<&str> {
        non_empty(&self.font_family)
    }

    /// Converted page background, if one is set.
    pub fn background_rgb(&self) -> Result<Option<RgbColor>> {
        non_empty(&self.background_color).map(hex_to_rgb).transpose()
    }

    /// Converted text color, if one is set.
    pub fn font_rgb(&self) -> Result<Option<RgbColor>> {
        non_empty(&self.font_color).map(hex_to_rgb).transpose()
    }

    /// Merge `overrides` over this style, field by field.
    ///
    /// Fields absent from the override keep their current value. Colors and
    /// font names are not checked here; colors are validated when converted.
    pub fn merged(&self, overrides: Option<&SlideStyleOverride>) -> SlideStyle {
        let Some(o) = overrides else {
            return self.clone();
        };

        SlideStyle {
            font_family: o
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            font_size: o.font_size.unwrap_or(self.font_size),
            background_color: o
                .background_color
                .clone()
                .unwrap_or_else(|| self.background_color.clone()),
            font_color: o
                .font_color
                .clone()
                .unwrap_or_else(|| self.font_color.clone()),
            is_auto_fit: o.is_auto_fit.unwrap_or(self.is_auto_fit),
            is_bold: o.is_bold.unwrap_or(self.is_bold),
            is_italic: o.is_italic.unwrap_or(self.is_italic),
            is_centered: o.is_centered.unwrap_or(self.is_centered),
        }
    }
}

/// Only the empty string counts as unset; anything else is passed on as is.
fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// A caller-supplied subset of [`SlideStyle`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideStyleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_fit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_centered: Option<bool>,
}

/// Resolve the effective style for a deck.
pub fn resolve_style(base: &SlideStyle, overrides: Option<&SlideStyleOverride>) -> SlideStyle {
    base.merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let style = SlideStyle::default();
        assert_eq!(style.font_family, "Arial");
        assert_eq!(style.font_size, 24.0);
        assert_eq!(style.background_color, "#ffffff");
        assert_eq!(style.font_color, "#000000");
        assert!(style.is_auto_fit);
        assert!(!style.is_bold && !style.is_italic && !style.is_centered);
    }

    #[test]
    fn test_no_override_keeps_base() {
        let base = SlideStyle::worship();
        assert_eq!(resolve_style(&base, None), base);
        assert_eq!(
            resolve_style(&base, Some(&SlideStyleOverride::default())),
            base
        );
    }

    #[test]
    fn test_override_wins_per_field() {
        let overrides = SlideStyleOverride {
            font_size: Some(40.0),
            font_color: Some("#ff0000".to_string()),
            is_bold: Some(false),
            ..Default::default()
        };

        let style = resolve_style(&SlideStyle::worship(), Some(&overrides));

        assert_eq!(style.font_size, 40.0);
        assert_eq!(style.font_color, "#ff0000");
        assert!(!style.is_bold);
        // Untouched fields come from the base.
        assert_eq!(style.font_family, "Times New Roman");
        assert!(style.is_centered);
        assert_eq!(style.background_color, "#ffffff");
    }

    #[test]
    fn test_merge_does_not_validate() {
        let overrides = SlideStyleOverride {
            background_color: Some("not a color".to_string()),
            font_family: Some("Comic Sans MS".to_string()),
            ..Default::default()
        };

        let style = resolve_style(&SlideStyle::default(), Some(&overrides));
        assert_eq!(style.background_color, "not a color");
        assert_eq!(style.font_family, "Comic Sans MS");
    }

    #[test]
    fn test_override_deserializes_camel_case_subset() {
        let overrides: SlideStyleOverride =
            serde_json::from_str(r##"{"fontFamily":"Lato","isCentered":true}"##).unwrap();

        assert_eq!(overrides.font_family.as_deref(), Some("Lato"));
        assert_eq!(overrides.is_centered, Some(true));
        assert_eq!(overrides.font_size, None);
    }

    #[test]
    fn test_unset_colors_are_none() {
        let style = SlideStyle {
            background_color: String::new(),
            font_color: String::new(),
            font_family: String::new(),
            ..SlideStyle::default()
        };
        assert_eq!(style.background_rgb().unwrap(), None);
        assert_eq!(style.font_rgb().unwrap(), None);
        assert_eq!(style.font_family(), None);
    }

    #[test]
    fn test_blank_colors_are_not_unset() {
        let style = SlideStyle {
            background_color: "   ".to_string(),
            font_color: " \t ".to_string(),
            ..SlideStyle::default()
        };
        assert!(matches!(style.background_rgb(), Err(Error::InvalidColor { .. })));
        assert!(matches!(style.font_rgb(), Err(Error::InvalidColor { .. })));
    }

    #[test]
    fn test_font_family_passed_through_unchanged() {
        let style = SlideStyle {
            font_family: " Open Sans ".to_string(),
            ..SlideStyle::default()
        };
        assert_eq!(style.font_family(), Some(" Open Sans "));
    }

    #[test]
    fn test_set_colors_are_converted() {
        let style = SlideStyle::default();
        assert_eq!(style.background_rgb().unwrap().map(|c| c.to_hex()).as_deref(), Some("#ffffff"));
        assert_eq!(style.font_rgb().unwrap().map(|c| c.to_hex()).as_deref(), Some("#000000"));
        assert_eq!(style.font_family(), Some("Arial"));

        let bad = SlideStyle {
            font_color: "#00000g".to_string(),
            ..SlideStyle::default()
        };
        assert!(bad.font_rgb().is_err());
    }

    #[test]
    fn test_font_families_include_defaults() {
        assert!(FONT_FAMILIES.contains(&SlideStyle::default().font_family.as_str()));
        assert!(FONT_FAMILIES.contains(&SlideStyle::worship().font_family.as_str()));
    }
}
