//! Deck Assembly
//!
//! Pure translation of a completed Story into the ordered layout-operation
//! sequence the presentation renderer executes.

mod assembly;
mod ops;
mod style;

pub use assembly::{assemble, ClosingSlideSpec};
pub use ops::{
    ContentAlignment, DashStyle, DeckOp, Dimensions, Fill, OutlineStyle, ParagraphAlignment, Rgb,
    ShapeKind, TextStyle, Transform,
};
pub use style::DEFAULT_PLACEHOLDER_ID;
