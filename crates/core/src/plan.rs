//! Building the ordered operation batch for a deck.

use crate::error::Result;
use crate::fit::AutoFit;
use crate::ops::{
    AffineTransform, Alignment, ColorValue, CreateShape, CreateSlide, DeleteObject, Dimension,
    ElementProperties, InsertText, LayoutReference, OptionalColor, PageBackgroundFill,
    PageProperties, ParagraphStyle, PredefinedLayout, ShapeType, Size, SlideOperation,
    SlideOperationBatch, SolidFill, TextRange, TextStyle, Unit, UpdatePageProperties,
    UpdateParagraphStyle, UpdateTextStyle,
};
use crate::segment::SlideContentBlock;
use crate::style::SlideStyle;

/// Id of the slide created for the block at `index`.
pub fn slide_id(index: usize) -> String {
    format!("slide_{}", index)
}

/// Id of the text box created for the block at `index`.
pub fn text_box_id(index: usize) -> String {
    format!("text_box_{}", index)
}

/// Placement of the text box on each slide, in EMU.
///
/// The defaults target a standard 10" x 7.5" page (9144000 x 6858000 EMU)
/// and leave roughly a third of an inch free on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBoxGeometry {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for TextBoxGeometry {
    fn default() -> Self {
        Self {
            width: 8_500_000.0,
            height: 6_200_000.0,
            offset_x: 320_000.0,
            offset_y: 330_000.0,
        }
    }
}

impl TextBoxGeometry {
    fn element_properties(&self, page_object_id: String) -> ElementProperties {
        ElementProperties {
            page_object_id,
            size: Size {
                width: Dimension::emu(self.width),
                height: Dimension::emu(self.height),
            },
            transform: AffineTransform {
                scale_x: 1.0,
                scale_y: 1.0,
                translate_x: self.offset_x,
                translate_y: self.offset_y,
                unit: Unit::Emu,
            },
        }
    }
}

/// Turns segmented blocks and a resolved style into renderer operations.
#[derive(Debug, Clone, Default)]
pub struct SlidePlanBuilder {
    auto_fit: AutoFit,
    geometry: TextBoxGeometry,
}

impl SlidePlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_fit(mut self, auto_fit: AutoFit) -> Self {
        self.auto_fit = auto_fit;
        self
    }

    pub fn with_geometry(mut self, geometry: TextBoxGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Build the full batch for `blocks`.
    ///
    /// Each block contributes, in order: create slide, optional background,
    /// create text box, insert text, text style, optional center alignment.
    /// When the renderer reported a placeholder slide, a single delete for
    /// it is appended as the last operation.
    ///
    /// Fails on the first malformed color in `style`.
    pub fn build(
        &self,
        blocks: &[SlideContentBlock],
        style: &SlideStyle,
        placeholder_slide_id: Option<&str>,
    ) -> Result<SlideOperationBatch> {
        // Convert once up front so a bad color fails before any work is done.
        let background = style.background_rgb()?;
        let foreground = style.font_rgb()?;

        let mut batch = Vec::with_capacity(blocks.len() * 6 + 1);

        for (index, block) in blocks.iter().enumerate() {
            let slide = slide_id(index);
            let text_box = text_box_id(index);

            batch.push(SlideOperation::CreateSlide(CreateSlide {
                object_id: slide.clone(),
                slide_layout_reference: LayoutReference {
                    predefined_layout: PredefinedLayout::Blank,
                },
            }));

            if let Some(rgb_color) = background {
                batch.push(SlideOperation::UpdatePageProperties(UpdatePageProperties {
                    object_id: slide.clone(),
                    page_properties: PageProperties {
                        page_background_fill: PageBackgroundFill {
                            solid_fill: SolidFill {
                                color: ColorValue { rgb_color },
                            },
                        },
                    },
                    fields: "pageBackgroundFill".to_string(),
                }));
            }

            batch.push(SlideOperation::CreateShape(CreateShape {
                object_id: text_box.clone(),
                shape_type: ShapeType::TextBox,
                element_properties: self.geometry.element_properties(slide),
            }));

            batch.push(SlideOperation::InsertText(InsertText {
                object_id: text_box.clone(),
                text: block.text().to_string(),
            }));

            let font_size =
                self.auto_fit
                    .font_size(block.text(), Some(style.font_size), style.is_auto_fit);
            let text_style = TextStyle {
                font_size: Dimension::pt(font_size),
                font_family: style.font_family().map(str::to_string),
                foreground_color: foreground.map(|rgb_color| OptionalColor {
                    opaque_color: ColorValue { rgb_color },
                }),
                bold: style.is_bold.then_some(true),
                italic: style.is_italic.then_some(true),
            };
            let fields = text_style.field_mask();

            batch.push(SlideOperation::UpdateTextStyle(UpdateTextStyle {
                object_id: text_box.clone(),
                style: text_style,
                text_range: TextRange::all(),
                fields,
            }));

            if style.is_centered {
                batch.push(SlideOperation::UpdateParagraphStyle(UpdateParagraphStyle {
                    object_id: text_box,
                    style: ParagraphStyle {
                        alignment: Alignment::Center,
                    },
                    text_range: TextRange::all(),
                    fields: "alignment".to_string(),
                }));
            }
        }

        if let Some(placeholder) = placeholder_slide_id {
            batch.push(SlideOperation::DeleteObject(DeleteObject {
                object_id: placeholder.to_string(),
            }));
        }

        log::debug!(
            "Planned {} operations for {} slides",
            batch.len(),
            blocks.len()
        );

        Ok(batch)
    }
}

/// Build a batch with the default auto-fit constants and geometry.
pub fn build_batch(
    blocks: &[SlideContentBlock],
    style: &SlideStyle,
    placeholder_slide_id: Option<&str>,
) -> Result<SlideOperationBatch> {
    SlidePlanBuilder::new().build(blocks, style, placeholder_slide_id)
}
