//! Assembly Engine
//!
//! Deterministically translates a completed Story into the ordered layout
//! operation sequence. Same Story in, same sequence out; no network, no
//! randomness. Object ids are derived from role and position, never from user
//! text, so uniqueness holds by construction.
//!
//! A Story that has not finished enrichment (missing public image URLs) is a
//! precondition violation, not a recoverable error.

use crate::domain::story::{Page, Story};

use super::ops::{ContentAlignment, DeckOp, ParagraphAlignment, ShapeKind, TextStyle, Transform};
use super::style;

/// Content-independent inputs of the closing slide
#[derive(Debug, Clone)]
pub struct ClosingSlideSpec {
    /// Attribution image shown full-bleed
    pub image_url: String,
    /// Hyperlink target of the three link buttons
    pub link_url: String,
}

/// Assemble the full operation sequence for a completed story: title block,
/// one block per page in paragraph order, then the closing block (pinned to
/// deck position 0 via its insertion index).
pub fn assemble(story: &Story, closing: &ClosingSlideSpec) -> Vec<DeckOp> {
    let mut ops = Vec::new();
    ops.extend(title_slide_ops(story));
    for (index, page) in story.pages().iter().enumerate() {
        ops.extend(page_slide_ops(index, page));
    }
    ops.extend(closing_slide_ops(closing));
    ops
}

fn title_slide_ops(story: &Story) -> Vec<DeckOp> {
    vec![
        DeckOp::CreateSlide {
            object_id: "titleSlide".to_string(),
            insertion_index: None,
        },
        DeckOp::DeleteObject {
            object_id: style::DEFAULT_PLACEHOLDER_ID.to_string(),
        },
        DeckOp::CreateImage {
            object_id: "titlecoverimage".to_string(),
            slide_id: "titleSlide".to_string(),
            url: story.cover_image_url().to_string(),
            transform: style::IMAGE_TRANSFORM,
        },
        DeckOp::CreateShape {
            object_id: "titlebackground".to_string(),
            slide_id: "titleSlide".to_string(),
            kind: ShapeKind::TextBox,
            size: style::TITLE_BOX_SIZE,
            transform: None,
        },
        DeckOp::UpdateShapeStyle {
            object_id: "titlebackground".to_string(),
            fill: Some(style::TITLE_BOX_FILL),
            outline: None,
            content_alignment: Some(ContentAlignment::Middle),
            link_url: None,
        },
        DeckOp::InsertText {
            object_id: "titlebackground".to_string(),
            text: story.title().to_string(),
        },
        DeckOp::UpdateParagraphStyle {
            object_id: "titlebackground".to_string(),
            alignment: ParagraphAlignment::Center,
        },
        DeckOp::UpdateTextStyle {
            object_id: "titlebackground".to_string(),
            style: TextStyle {
                bold: true,
                font_size_pt: style::TITLE_FONT_SIZE_PT,
                font_family: Some(style::TITLE_FONT_FAMILY),
                foreground: Some(style::WHITE),
            },
        },
    ]
}

fn page_slide_ops(index: usize, page: &Page) -> Vec<DeckOp> {
    let slide_id = format!("{}_SLIDE", index);
    let paragraph_id = format!("{}_PARAGRAPH", index);
    let image_id = format!("{}_IMAGE", index);

    let image_url = page
        .public_image_url()
        .expect("assembled page must be published");

    vec![
        DeckOp::CreateSlide {
            object_id: slide_id.clone(),
            insertion_index: None,
        },
        DeckOp::CreateImage {
            object_id: image_id,
            slide_id: slide_id.clone(),
            url: image_url.to_string(),
            transform: style::IMAGE_TRANSFORM,
        },
        DeckOp::CreateShape {
            object_id: paragraph_id.clone(),
            slide_id,
            kind: ShapeKind::TextBox,
            size: style::PAGE_BOX_SIZE,
            transform: Some(style::PAGE_BOX_TRANSFORM),
        },
        DeckOp::UpdateShapeStyle {
            object_id: paragraph_id.clone(),
            fill: Some(style::PAGE_BOX_FILL),
            outline: Some(style::PAGE_BOX_OUTLINE),
            content_alignment: Some(ContentAlignment::Top),
            link_url: None,
        },
        DeckOp::InsertText {
            object_id: paragraph_id.clone(),
            text: page.paragraph().to_string(),
        },
        DeckOp::UpdateParagraphStyle {
            object_id: paragraph_id.clone(),
            alignment: ParagraphAlignment::Start,
        },
        DeckOp::UpdateTextStyle {
            object_id: paragraph_id,
            style: TextStyle {
                bold: true,
                font_size_pt: style::PAGE_FONT_SIZE_PT,
                font_family: None,
                foreground: Some(style::WHITE),
            },
        },
    ]
}

fn closing_slide_ops(closing: &ClosingSlideSpec) -> Vec<DeckOp> {
    let mut ops = vec![
        // Pinned to the front of the deck regardless of emission order
        DeckOp::CreateSlide {
            object_id: "finalSlide".to_string(),
            insertion_index: Some(0),
        },
        DeckOp::CreateImage {
            object_id: "finalImage".to_string(),
            slide_id: "finalSlide".to_string(),
            url: closing.image_url.clone(),
            transform: style::IMAGE_TRANSFORM,
        },
        DeckOp::CreateShape {
            object_id: "madeWith".to_string(),
            slide_id: "finalSlide".to_string(),
            kind: ShapeKind::TextBox,
            size: style::MADE_WITH_SIZE,
            transform: Some(style::MADE_WITH_TRANSFORM),
        },
        DeckOp::InsertText {
            object_id: "madeWith".to_string(),
            text: "Made With".to_string(),
        },
        DeckOp::UpdateParagraphStyle {
            object_id: "madeWith".to_string(),
            alignment: ParagraphAlignment::Start,
        },
        DeckOp::UpdateTextStyle {
            object_id: "madeWith".to_string(),
            style: TextStyle {
                bold: false,
                font_size_pt: style::MADE_WITH_FONT_SIZE_PT,
                font_family: Some(style::ACCENT_FONT_FAMILY),
                foreground: None,
            },
        },
        DeckOp::CreateShape {
            object_id: "storyBook".to_string(),
            slide_id: "finalSlide".to_string(),
            kind: ShapeKind::TextBox,
            size: style::PRODUCT_NAME_SIZE,
            transform: Some(style::PRODUCT_NAME_TRANSFORM),
        },
        DeckOp::InsertText {
            object_id: "storyBook".to_string(),
            text: "Storydeck".to_string(),
        },
        DeckOp::UpdateParagraphStyle {
            object_id: "storyBook".to_string(),
            alignment: ParagraphAlignment::Start,
        },
        DeckOp::UpdateTextStyle {
            object_id: "storyBook".to_string(),
            style: TextStyle {
                bold: true,
                font_size_pt: style::TITLE_FONT_SIZE_PT,
                font_family: Some(style::TITLE_FONT_FAMILY),
                foreground: None,
            },
        },
    ];

    let buttons = [
        ("howitworks", "How It Works"),
        ("sourcelink", "Source"),
        ("versionlink", "Version 0.1.0"),
    ];

    for ((object_id, label), translate_y) in buttons.iter().zip(style::BUTTON_TRANSLATE_Y_PTS) {
        ops.extend([
            DeckOp::CreateShape {
                object_id: object_id.to_string(),
                slide_id: "finalSlide".to_string(),
                kind: ShapeKind::RoundRectangle,
                size: style::BUTTON_SIZE,
                transform: Some(Transform::new(
                    1.0,
                    1.0,
                    style::BUTTON_TRANSLATE_X_PT,
                    translate_y,
                )),
            },
            DeckOp::UpdateShapeStyle {
                object_id: object_id.to_string(),
                fill: Some(style::BUTTON_FILL),
                outline: None,
                content_alignment: None,
                link_url: Some(closing.link_url.clone()),
            },
            DeckOp::InsertText {
                object_id: object_id.to_string(),
                text: label.to_string(),
            },
            DeckOp::UpdateParagraphStyle {
                object_id: object_id.to_string(),
                alignment: ParagraphAlignment::Center,
            },
            DeckOp::UpdateTextStyle {
                object_id: object_id.to_string(),
                style: TextStyle {
                    bold: false,
                    font_size_pt: style::BUTTON_FONT_SIZE_PT,
                    font_family: Some(style::ACCENT_FONT_FAMILY),
                    foreground: None,
                },
            },
        ]);
    }

    ops
}
