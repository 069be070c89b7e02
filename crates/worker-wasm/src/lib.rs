//! WASM-compatible wrapper for the lyric deck compiler.
//!
//! This crate exposes deck compilation to JavaScript for use in Cloudflare
//! Workers. The worker owns the renderer credentials; it creates the deck,
//! passes the placeholder slide id in here, and sends the returned requests
//! to the presentation API.

use serde::{Deserialize, Serialize};
use slides_core::{
    DeckCompiler, ErrorResponse, SlideOperation, SlideStyle, SlideStyleOverride, FONT_FAMILIES,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of compiling lyrics.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResult {
    /// Operations for the presentation `batchUpdate` call, in order.
    pub requests: Vec<SlideOperation>,
    /// Number of slides the requests create.
    pub slide_count: usize,
}

/// Compile lyrics into slide requests.
///
/// # Arguments
/// * `lyrics` - Raw lyrics, verses separated by blank lines
/// * `style` - Optional partial style object (camelCase fields)
/// * `placeholder_slide_id` - Id of the blank slide the API created with the deck
///
/// # Returns
/// `{ requests, slideCount }`, or throws `{ error, code }`.
#[wasm_bindgen]
pub fn compile_deck(
    lyrics: &str,
    style: JsValue,
    placeholder_slide_id: Option<String>,
) -> Result<JsValue, JsValue> {
    let overrides: Option<SlideStyleOverride> = if style.is_undefined() || style.is_null() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value(style).map_err(|e| {
            to_js(&ErrorResponse {
                error: format!("Invalid style object: {}", e),
                code: Some("INVALID_INPUT".to_string()),
            })
        })?)
    };

    let result = compile_deck_impl(lyrics, overrides.as_ref(), placeholder_slide_id.as_deref())
        .map_err(|e| to_js(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn compile_deck_impl(
    lyrics: &str,
    overrides: Option<&SlideStyleOverride>,
    placeholder_slide_id: Option<&str>,
) -> Result<CompileResult, ErrorResponse> {
    let plan = DeckCompiler::new()
        .compile(lyrics, overrides, placeholder_slide_id)
        .map_err(|e| ErrorResponse::from(&e))?;

    Ok(CompileResult {
        requests: plan.batch,
        slide_count: plan.slide_count,
    })
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value)
        .unwrap_or_else(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The default style profile.
#[wasm_bindgen]
pub fn default_style() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&SlideStyle::default())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The style profile the web client starts from.
#[wasm_bindgen]
pub fn worship_style() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&SlideStyle::worship())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Font families offered in the style picker.
#[wasm_bindgen]
pub fn font_families() -> js_sys::Array {
    FONT_FAMILIES.iter().map(|f| JsValue::from_str(f)).collect()
}
