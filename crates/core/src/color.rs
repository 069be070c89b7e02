//! Hex color conversion.
//!
//! Slide colors arrive as `#rrggbb` strings and leave as normalized RGB
//! channels in `[0.0, 1.0]`, the form the renderer expects.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An RGB color with each channel normalized to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbColor {
    /// Render back to lowercase `#rrggbb`, rounding each channel to the
    /// nearest 8-bit value.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue)
        )
    }
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a 6-digit hex color, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 {
        return Err(Error::invalid_color(
            hex,
            format!("expected 6 hex digits, got {}", digits.len()),
        ));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_color(hex, "contains non-hex characters"));
    }

    // All bytes are ASCII hex digits, so the 2-byte slices are valid.
    let channel = |range: std::ops::Range<usize>| -> Result<f64> {
        u8::from_str_radix(&digits[range], 16)
            .map(|byte| f64::from(byte) / 255.0)
            .map_err(|e| Error::invalid_color(hex, e.to_string()))
    };

    Ok(RgbColor {
        red: channel(0..2)?,
        green: channel(2..4)?,
        blue: channel(4..6)?,
    })
}
