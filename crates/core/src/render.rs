//! The renderer collaborator and the publish flow.
//!
//! A renderer is whatever actually creates and stores the presentation. It is
//! injected into [`publish`] so the compiler never depends on credentials or
//! process-wide client state.

use crate::compiler::DeckCompiler;
use crate::error::{Error, RenderStage, Result};
use crate::ops::SlideOperation;
use crate::types::{GenerateRequest, GenerateResponse};

/// A freshly created, still empty deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckHandle {
    pub deck_id: String,
    /// Blank slide the renderer inserted on creation, if any.
    pub placeholder_slide_id: Option<String>,
}

/// Backend that realizes a compiled deck.
pub trait Renderer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create an empty deck with the given title.
    fn create_deck(&mut self, title: &str) -> std::result::Result<DeckHandle, Self::Error>;

    /// Apply `batch` in order. A failure of any operation fails the call.
    fn apply_batch(
        &mut self,
        deck_id: &str,
        batch: &[SlideOperation],
    ) -> std::result::Result<(), Self::Error>;

    /// Open the deck up for viewing and editing by link.
    fn make_shareable(&mut self, deck_id: &str) -> std::result::Result<(), Self::Error>;

    /// URL where the deck can be opened.
    fn deck_url(&self, deck_id: &str) -> String {
        google_slides_url(deck_id)
    }
}

/// Edit URL of a Google Slides presentation.
pub fn google_slides_url(deck_id: &str) -> String {
    format!("https://docs.google.com/presentation/d/{}/edit", deck_id)
}

fn stage_failed<E>(stage: RenderStage) -> impl FnOnce(E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |e| {
        log::warn!("Renderer failed during {}: {}", stage, e);
        Error::RendererFailure {
            stage,
            source: Box::new(e),
        }
    }
}

/// Compile `request` and publish it through `renderer`.
///
/// Lyrics are validated before the renderer is touched. Renderer errors are
/// not retried; they are returned with the stage that failed.
pub fn publish<R: Renderer>(
    renderer: &mut R,
    compiler: &DeckCompiler,
    request: &GenerateRequest,
) -> Result<GenerateResponse> {
    let lyrics = request
        .lyrics
        .as_deref()
        .ok_or_else(|| Error::InvalidInput("lyrics required".to_string()))?;
    let prepared = compiler.prepare(lyrics, request.style.as_ref())?;

    let title = request.title();
    log::info!("Creating deck {:?}", title);
    let deck = renderer
        .create_deck(title)
        .map_err(stage_failed(RenderStage::CreateDeck))?;

    let plan = compiler.plan(&prepared, deck.placeholder_slide_id.as_deref())?;

    log::info!(
        "Applying {} operations to deck {}",
        plan.batch.len(),
        deck.deck_id
    );
    renderer
        .apply_batch(&deck.deck_id, &plan.batch)
        .map_err(stage_failed(RenderStage::ApplyBatch))?;

    renderer
        .make_shareable(&deck.deck_id)
        .map_err(stage_failed(RenderStage::MakeShareable))?;

    Ok(GenerateResponse {
        presentation_url: renderer.deck_url(&deck.deck_id),
        slide_count: plan.slide_count,
    })
}

/// Errors raised by [`RecordingRenderer`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordingError {
    #[error("Unknown deck: {0}")]
    UnknownDeck(String),

    #[error("Injected failure at {0}")]
    Injected(RenderStage),
}

/// A deck held by [`RecordingRenderer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedDeck {
    pub title: String,
    pub batches: Vec<Vec<SlideOperation>>,
    pub shared: bool,
}

/// In-memory renderer that records what it is asked to do.
///
/// Deck ids are sequential (`deck_1`, `deck_2`, ...). Each new deck reports
/// a placeholder slide `<deck_id>_p` unless disabled.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    decks: Vec<(String, RecordedDeck)>,
    placeholder: bool,
    fail_at: Option<RenderStage>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self {
            decks: Vec::new(),
            placeholder: true,
            fail_at: None,
        }
    }
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether new decks come with a placeholder slide.
    pub fn with_placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Fail every call made at `stage`.
    pub fn failing_at(mut self, stage: RenderStage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    pub fn deck(&self, deck_id: &str) -> Option<&RecordedDeck> {
        self.decks
            .iter()
            .find(|(id, _)| id == deck_id)
            .map(|(_, deck)| deck)
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    fn check(&self, stage: RenderStage) -> std::result::Result<(), RecordingError> {
        match self.fail_at {
            Some(failing) if failing == stage => Err(RecordingError::Injected(stage)),
            _ => Ok(()),
        }
    }

    fn deck_mut(&mut self, deck_id: &str) -> std::result::Result<&mut RecordedDeck, RecordingError> {
        self.decks
            .iter_mut()
            .find(|(id, _)| id == deck_id)
            .map(|(_, deck)| deck)
            .ok_or_else(|| RecordingError::UnknownDeck(deck_id.to_string()))
    }
}

impl Renderer for RecordingRenderer {
    type Error = RecordingError;

    fn create_deck(&mut self, title: &str) -> std::result::Result<DeckHandle, Self::Error> {
        self.check(RenderStage::CreateDeck)?;

        let deck_id = format!("deck_{}", self.decks.len() + 1);
        self.decks.push((
            deck_id.clone(),
            RecordedDeck {
                title: title.to_string(),
                ..Default::default()
            },
        ));

        let placeholder_slide_id = self.placeholder.then(|| format!("{}_p", deck_id));
        Ok(DeckHandle {
            deck_id,
            placeholder_slide_id,
        })
    }

    fn apply_batch(
        &mut self,
        deck_id: &str,
        batch: &[SlideOperation],
    ) -> std::result::Result<(), Self::Error> {
        self.check(RenderStage::ApplyBatch)?;
        self.deck_mut(deck_id)?.batches.push(batch.to_vec());
        Ok(())
    }

    fn make_shareable(&mut self, deck_id: &str) -> std::result::Result<(), Self::Error> {
        self.check(RenderStage::MakeShareable)?;
        self.deck_mut(deck_id)?.shared = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SlideStyleOverride;

    #[test]
    fn test_publish_happy_path() {
        let mut renderer = RecordingRenderer::new();
        let request = GenerateRequest::new("Test verse 1\n\nTest verse 2").with_title("Sunday");

        let response = publish(&mut renderer, &DeckCompiler::new(), &request).unwrap();

        assert_eq!(response.slide_count, 2);
        assert_eq!(
            response.presentation_url,
            "https://docs.google.com/presentation/d/deck_1/edit"
        );

        let deck = renderer.deck("deck_1").unwrap();
        assert_eq!(deck.title, "Sunday");
        assert!(deck.shared);
        assert_eq!(deck.batches.len(), 1);
        assert_eq!(
            deck.batches[0].last().map(SlideOperation::object_id),
            Some("deck_1_p")
        );
    }

    #[test]
    fn test_publish_without_placeholder() {
        let mut renderer = RecordingRenderer::new().with_placeholder(false);
        let request = GenerateRequest::new("Only verse");

        publish(&mut renderer, &DeckCompiler::new(), &request).unwrap();

        let deck = renderer.deck("deck_1").unwrap();
        assert_eq!(deck.title, "My Lyrics Presentation");
        assert!(!deck.batches[0]
            .iter()
            .any(|op| matches!(op, SlideOperation::DeleteObject(_))));
    }

    #[test]
    fn test_invalid_input_never_reaches_renderer() {
        let mut renderer = RecordingRenderer::new();
        let compiler = DeckCompiler::new();

        let missing = publish(&mut renderer, &compiler, &GenerateRequest::default()).unwrap_err();
        assert!(matches!(missing, Error::InvalidInput(ref m) if m == "lyrics required"));

        let blank = publish(&mut renderer, &compiler, &GenerateRequest::new(" \n\n ")).unwrap_err();
        assert!(matches!(blank, Error::InvalidInput(ref m) if m == "no content sections"));

        assert_eq!(renderer.deck_count(), 0);
    }

    #[test]
    fn test_renderer_failure_names_stage() {
        for stage in [
            RenderStage::CreateDeck,
            RenderStage::ApplyBatch,
            RenderStage::MakeShareable,
        ] {
            let mut renderer = RecordingRenderer::new().failing_at(stage);
            let err = publish(&mut renderer, &DeckCompiler::new(), &GenerateRequest::new("A"))
                .unwrap_err();

            match err {
                Error::RendererFailure { stage: failed, source } => {
                    assert_eq!(failed, stage);
                    let inner = source.downcast_ref::<RecordingError>().unwrap();
                    assert_eq!(inner, &RecordingError::Injected(stage));
                }
                other => panic!("expected renderer failure, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_bad_color_never_reaches_renderer() {
        let mut renderer = RecordingRenderer::new();
        let request = GenerateRequest::new("A").with_style(SlideStyleOverride {
            font_color: Some("#xyzxyz".to_string()),
            ..Default::default()
        });

        let err = publish(&mut renderer, &DeckCompiler::new(), &request).unwrap_err();
        assert_eq!(err.code(), "INVALID_COLOR");
        assert_eq!(renderer.deck_count(), 0);
    }

    #[test]
    fn test_apply_to_unknown_deck() {
        let mut renderer = RecordingRenderer::new();
        let err = renderer.apply_batch("nope", &[]).unwrap_err();
        assert_eq!(err, RecordingError::UnknownDeck("nope".to_string()));
    }
}
