//! Story Pipeline
//!
//! - `page`: per-paragraph enrichment (brief, prompt, render, persist, publish)
//! - `cover`: title + cover illustration, derived concurrently
//! - `driver`: top-level orchestration and fan-out

mod cover;
mod driver;
mod page;

pub use cover::{CoverAssets, CoverPipeline};
pub use driver::StoryPipeline;
pub use page::PageEnricher;

use crate::domain::story::StoryId;

/// Object-store key for a published illustration. `slot` is the page index or
/// the literal "cover".
pub(crate) fn upload_key(story_id: StoryId, slot: &str) -> String {
    format!("DOCTOR_SLIDES_{}_{}.png", story_id, slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_key_is_namespaced_by_story_and_slot() {
        let id = StoryId::new();
        let key = upload_key(id, "cover");
        assert_eq!(key, format!("DOCTOR_SLIDES_{}_cover.png", id));
        assert_ne!(upload_key(id, "0"), upload_key(id, "1"));
    }
}
