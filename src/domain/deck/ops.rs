//! Layout Operations
//!
//! The flat operation vocabulary consumed by the presentation renderer. The
//! renderer processes operations sequentially; later operations may reference
//! object ids created by earlier ones, and a reference to an undefined id is
//! a programming error in the assembly engine, not a runtime condition.

/// Linear RGB color, each channel in 0..1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub const fn grey(level: f64) -> Self {
        Self::new(level, level, level)
    }
}

/// Solid fill with an independent alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Rgb,
    pub alpha: f64,
}

/// Outline dash style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashStyle {
    Solid,
}

/// Shape outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    pub color: Rgb,
    pub weight_pt: f64,
    pub dash: DashStyle,
}

/// Vertical alignment of content within a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAlignment {
    Top,
    Middle,
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Start,
    Center,
}

/// Element size in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width_pt: f64,
    pub height_pt: f64,
}

impl Dimensions {
    pub const fn new(width_pt: f64, height_pt: f64) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }
}

/// Placement transform in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x_pt: f64,
    pub translate_y_pt: f64,
}

impl Transform {
    pub const fn new(scale_x: f64, scale_y: f64, translate_x_pt: f64, translate_y_pt: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x_pt,
            translate_y_pt,
        }
    }

    /// Uniform scale with no translation
    pub const fn scaled(scale: f64) -> Self {
        Self::new(scale, scale, 0.0, 0.0)
    }
}

/// Shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    TextBox,
    RoundRectangle,
}

/// Character styling applied to the full text of an object
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub bold: bool,
    pub font_size_pt: f64,
    pub font_family: Option<&'static str>,
    pub foreground: Option<Rgb>,
}

/// One layout operation
#[derive(Debug, Clone, PartialEq)]
pub enum DeckOp {
    /// Create a blank slide. `insertion_index` overrides the final position
    /// in the deck independently of emission order.
    CreateSlide {
        object_id: String,
        insertion_index: Option<usize>,
    },

    /// Delete an existing object (the renderer's default placeholder)
    DeleteObject { object_id: String },

    /// Create an image element on a slide from a public URL
    CreateImage {
        object_id: String,
        slide_id: String,
        url: String,
        transform: Transform,
    },

    /// Create a shape element on a slide
    CreateShape {
        object_id: String,
        slide_id: String,
        kind: ShapeKind,
        size: Dimensions,
        transform: Option<Transform>,
    },

    /// Restyle a shape: fill, outline, content alignment, hyperlink
    UpdateShapeStyle {
        object_id: String,
        fill: Option<Fill>,
        outline: Option<OutlineStyle>,
        content_alignment: Option<ContentAlignment>,
        link_url: Option<String>,
    },

    /// Insert literal text into a shape
    InsertText { object_id: String, text: String },

    /// Align the paragraph(s) of a shape
    UpdateParagraphStyle {
        object_id: String,
        alignment: ParagraphAlignment,
    },

    /// Restyle the text of a shape
    UpdateTextStyle {
        object_id: String,
        style: TextStyle,
    },
}

impl DeckOp {
    /// The object id this operation declares, if it creates one
    pub fn declared_id(&self) -> Option<&str> {
        match self {
            DeckOp::CreateSlide { object_id, .. }
            | DeckOp::CreateImage { object_id, .. }
            | DeckOp::CreateShape { object_id, .. } => Some(object_id),
            _ => None,
        }
    }

    /// Object ids this operation references without declaring
    pub fn referenced_ids(&self) -> Vec<&str> {
        match self {
            DeckOp::CreateSlide { .. } => Vec::new(),
            DeckOp::DeleteObject { object_id } => vec![object_id],
            DeckOp::CreateImage { slide_id, .. } | DeckOp::CreateShape { slide_id, .. } => {
                vec![slide_id]
            }
            DeckOp::UpdateShapeStyle { object_id, .. }
            | DeckOp::InsertText { object_id, .. }
            | DeckOp::UpdateParagraphStyle { object_id, .. }
            | DeckOp::UpdateTextStyle { object_id, .. } => vec![object_id],
        }
    }
}
