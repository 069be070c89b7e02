//! The lyric-to-deck compiler.
//!
//! Validates the lyrics, segments them into blocks, resolves the style once,
//! and plans every slide. No I/O happens here; the renderer-supplied
//! placeholder id is passed in by the caller.

use crate::error::{Error, Result};
use crate::fit::AutoFit;
use crate::plan::{SlidePlanBuilder, TextBoxGeometry};
use crate::segment::{segment, SlideContentBlock};
use crate::style::{resolve_style, SlideStyle, SlideStyleOverride};
use crate::types::DeckPlan;

/// Lyrics split into blocks with the effective style resolved.
///
/// Produced before the renderer is contacted so that bad lyrics or colors
/// are rejected without creating an empty deck.
#[derive(Debug, Clone)]
pub struct PreparedDeck {
    pub blocks: Vec<SlideContentBlock>,
    pub style: SlideStyle,
}

impl PreparedDeck {
    pub fn slide_count(&self) -> usize {
        self.blocks.len()
    }
}

/// Compiles lyrics into a [`DeckPlan`].
#[derive(Debug, Clone, Default)]
pub struct DeckCompiler {
    default_style: SlideStyle,
    planner: SlidePlanBuilder,
}

impl DeckCompiler {
    /// Create a compiler with the default style profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style that caller overrides are merged over.
    pub fn with_default_style(mut self, style: SlideStyle) -> Self {
        self.default_style = style;
        self
    }

    pub fn with_auto_fit(mut self, auto_fit: AutoFit) -> Self {
        self.planner = self.planner.with_auto_fit(auto_fit);
        self
    }

    pub fn with_geometry(mut self, geometry: TextBoxGeometry) -> Self {
        self.planner = self.planner.with_geometry(geometry);
        self
    }

    pub fn default_style(&self) -> &SlideStyle {
        &self.default_style
    }

    /// Validate and segment the lyrics, resolve the style, and check that its
    /// colors convert.
    pub fn prepare(
        &self,
        raw_text: &str,
        overrides: Option<&SlideStyleOverride>,
    ) -> Result<PreparedDeck> {
        if raw_text.is_empty() {
            return Err(Error::InvalidInput("lyrics required".to_string()));
        }

        let blocks = segment(raw_text);
        if blocks.is_empty() {
            return Err(Error::InvalidInput("no content sections".to_string()));
        }

        let style = resolve_style(&self.default_style, overrides);
        style.background_rgb()?;
        style.font_rgb()?;
        log::debug!("Segmented lyrics into {} sections", blocks.len());

        Ok(PreparedDeck { blocks, style })
    }

    /// Plan the operations for already prepared lyrics.
    pub fn plan(
        &self,
        prepared: &PreparedDeck,
        placeholder_slide_id: Option<&str>,
    ) -> Result<DeckPlan> {
        let batch = self
            .planner
            .build(&prepared.blocks, &prepared.style, placeholder_slide_id)?;

        Ok(DeckPlan {
            batch,
            slide_count: prepared.slide_count(),
        })
    }

    /// Compile lyrics into the full operation batch.
    pub fn compile(
        &self,
        raw_text: &str,
        overrides: Option<&SlideStyleOverride>,
        placeholder_slide_id: Option<&str>,
    ) -> Result<DeckPlan> {
        let prepared = self.prepare(raw_text, overrides)?;
        self.plan(&prepared, placeholder_slide_id)
    }
}

/// Compile lyrics over an explicit default style.
pub fn compile(
    raw_text: &str,
    overrides: Option<&SlideStyleOverride>,
    default_style: &SlideStyle,
    placeholder_slide_id: Option<&str>,
) -> Result<DeckPlan> {
    DeckCompiler::new()
        .with_default_style(default_style.clone())
        .compile(raw_text, overrides, placeholder_slide_id)
}
