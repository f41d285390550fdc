//! Domain layer - pure story and deck logic

pub mod deck;
pub mod morale;
pub mod paragraphs;
pub mod prompt;
pub mod story;
