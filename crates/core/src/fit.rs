//! Font sizing that approximates "auto-fit" without renderer support.
//!
//! Text is shrunk linearly when a block exceeds the character or line
//! capacity of the slide's text box at the preferred size. The tighter of
//! the two constraints wins, and the result never drops below a legible
//! floor or grows past the preferred size.

use unicode_normalization::UnicodeNormalization;

/// Size used when the caller does not ask for one.
pub const DEFAULT_FONT_SIZE: f64 = 24.0;

/// Smallest size a caller may request.
pub const MIN_FONT_SIZE: f64 = 8.0;

/// Smallest size auto-fit will shrink to.
pub const MIN_AUTO_FIT_SIZE: f64 = 10.0;

/// Capacity of the slide text box at the preferred font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoFit {
    pub max_chars_per_slide: usize,
    pub max_lines_per_slide: usize,
}

impl Default for AutoFit {
    fn default() -> Self {
        Self {
            max_chars_per_slide: 600,
            max_lines_per_slide: 10,
        }
    }
}

impl AutoFit {
    /// Create a heuristic with custom capacity constants.
    pub fn new(max_chars_per_slide: usize, max_lines_per_slide: usize) -> Self {
        Self {
            max_chars_per_slide,
            max_lines_per_slide,
        }
    }

    /// Compute the point size for `text`.
    ///
    /// With `is_auto_fit` off the preferred size is honored, floored at
    /// [`MIN_FONT_SIZE`]. With it on the size is scaled down by how far the
    /// text overflows the box, rounded, and kept between
    /// [`MIN_AUTO_FIT_SIZE`] and the preferred size.
    pub fn font_size(&self, text: &str, preferred: Option<f64>, is_auto_fit: bool) -> f64 {
        let base = preferred.unwrap_or(DEFAULT_FONT_SIZE).max(MIN_FONT_SIZE);
        if !is_auto_fit {
            return base;
        }

        // Composed form so combining accents don't count as extra characters.
        let chars = text.nfc().count().max(1);
        let lines = text.matches('\n').count() + 1;

        let char_scale = (self.max_chars_per_slide as f64 / chars as f64).min(1.0);
        let line_scale = (self.max_lines_per_slide as f64 / lines as f64).min(1.0);
        let scale = char_scale.min(line_scale);

        let size = (base * scale).round().min(base).max(MIN_AUTO_FIT_SIZE);

        log::debug!(
            "Auto-fit: {} chars, {} lines -> {}pt (scale: {:.2})",
            chars,
            lines,
            size,
            scale
        );

        size
    }
}

/// Compute a font size using the default capacity constants.
pub fn resolve_font_size(text: &str, preferred: Option<f64>, is_auto_fit: bool) -> f64 {
    AutoFit::default().font_size(text, preferred, is_auto_fit)
}
