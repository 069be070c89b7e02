//! Lyric-to-slide-deck compiler.
//!
//! Turns free-form lyrics into an ordered batch of slide operations: one
//! slide per verse, a single styled text box per slide, and font sizes that
//! shrink to fit long verses.

pub mod color;
pub mod compiler;
pub mod error;
pub mod fit;
pub mod ops;
pub mod plan;
pub mod render;
pub mod segment;
pub mod style;
pub mod types;

pub use color::{hex_to_rgb, RgbColor};
pub use compiler::{compile, DeckCompiler, PreparedDeck};
pub use error::{Error, RenderStage, Result};
pub use fit::{resolve_font_size, AutoFit};
pub use ops::{SlideOperation, SlideOperationBatch};
pub use plan::{build_batch, SlidePlanBuilder, TextBoxGeometry};
pub use render::{publish, DeckHandle, RecordingRenderer, Renderer};
pub use segment::{segment, SlideContentBlock};
pub use style::{resolve_style, SlideStyle, SlideStyleOverride, FONT_FAMILIES};
pub use types::{DeckPlan, ErrorResponse, GenerateRequest, GenerateResponse};
