//! Story Aggregate
//!
//! Invariants:
//! - `pages.len() == paragraphs.len()` from allocation onward
//! - page slot `i` corresponds to paragraph `i`, regardless of the order in
//!   which enrichment tasks complete
//! - a page moves through its enrichment stages strictly in order:
//!   text-only -> brief-derived -> prompt-derived -> image-rendered -> published

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use super::paragraphs::extract_paragraphs;

/// Story identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(Uuid);

impl StoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Page identity, used for logging only; renderer object ids are derived from
/// sequence position by the assembly engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The three free-text seeds defining a story premise. Immutable once
/// collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synopsis {
    /// Kind of protagonist ("fox", "zebra", ...)
    pub subject: String,
    /// Protagonist's proper name
    pub name: String,
    /// What the protagonist is trying to do
    pub goal: String,
}

impl Synopsis {
    pub fn new(
        subject: impl Into<String>,
        name: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            name: name.into(),
            goal: goal.into(),
        }
    }
}

/// One paragraph of narrative plus its derived illustration and publication
/// metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    id: PageId,
    paragraph: String,
    illustration_brief: Option<String>,
    image_prompt: Option<String>,
    local_image_path: Option<PathBuf>,
    public_image_url: Option<String>,
}

impl Page {
    /// Create a text-only page
    pub fn new(paragraph: impl Into<String>) -> Self {
        Self {
            id: PageId::new(),
            paragraph: paragraph.into(),
            illustration_brief: None,
            image_prompt: None,
            local_image_path: None,
            public_image_url: None,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn paragraph(&self) -> &str {
        &self.paragraph
    }

    pub fn illustration_brief(&self) -> Option<&str> {
        self.illustration_brief.as_deref()
    }

    pub fn image_prompt(&self) -> Option<&str> {
        self.image_prompt.as_deref()
    }

    pub fn local_image_path(&self) -> Option<&PathBuf> {
        self.local_image_path.as_ref()
    }

    pub fn public_image_url(&self) -> Option<&str> {
        self.public_image_url.as_deref()
    }

    /// text-only -> brief-derived
    pub fn set_illustration_brief(&mut self, brief: impl Into<String>) {
        debug_assert!(self.illustration_brief.is_none());
        self.illustration_brief = Some(brief.into());
    }

    /// brief-derived -> prompt-derived
    pub fn set_image_prompt(&mut self, prompt: impl Into<String>) {
        debug_assert!(self.illustration_brief.is_some());
        self.image_prompt = Some(prompt.into());
    }

    /// prompt-derived -> image-rendered
    pub fn set_local_image_path(&mut self, path: PathBuf) {
        debug_assert!(self.image_prompt.is_some());
        self.local_image_path = Some(path);
    }

    /// image-rendered -> published
    pub fn set_public_image_url(&mut self, url: impl Into<String>) {
        debug_assert!(self.local_image_path.is_some());
        self.public_image_url = Some(url.into());
    }

    /// A page is published once it carries a public image URL
    pub fn is_published(&self) -> bool {
        self.public_image_url.is_some()
    }
}

/// Story aggregate root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    id: StoryId,
    synopsis: Synopsis,
    narrative: String,
    paragraphs: Vec<String>,
    pages: Vec<Page>,
    title: String,
    cover_image_url: String,
    created_at: DateTime<Utc>,
}

impl Story {
    /// Create a new story with the default title and cover fallback; narrative
    /// and pages are filled in by the pipeline.
    pub fn new(synopsis: Synopsis, default_title: impl Into<String>, fallback_cover: impl Into<String>) -> Self {
        Self {
            id: StoryId::new(),
            synopsis,
            narrative: String::new(),
            paragraphs: Vec::new(),
            pages: Vec::new(),
            title: default_title.into(),
            cover_image_url: fallback_cover.into(),
            created_at: Utc::now(),
        }
    }

    /// Record the raw narrative text and derive the paragraph list from it.
    /// Paragraphs are produced exactly once.
    pub fn set_narrative(&mut self, narrative: impl Into<String>) {
        self.narrative = narrative.into();
        self.paragraphs = extract_paragraphs(&self.narrative);
    }

    /// Pre-size the page container, one text-only page per paragraph, so that
    /// concurrent workers write disjoint slots.
    pub fn allocate_pages(&mut self) {
        self.pages = self
            .paragraphs
            .iter()
            .map(|p| Page::new(p.clone()))
            .collect();
    }

    /// Write an enriched page into its slot. Only the worker that owns
    /// paragraph `index` may call this for that index.
    pub fn set_page(&mut self, index: usize, page: Page) {
        self.pages[index] = page;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_cover_image_url(&mut self, url: impl Into<String>) {
        self.cover_image_url = url.into();
    }

    pub fn id(&self) -> StoryId {
        self.id
    }

    pub fn synopsis(&self) -> &Synopsis {
        &self.synopsis
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cover_image_url(&self) -> &str {
        &self.cover_image_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Complete once every page is published; the driver additionally joins
    /// both cover tasks before assembly.
    pub fn is_complete(&self) -> bool {
        !self.pages.is_empty() && self.pages.iter().all(Page::is_published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_story() -> Story {
        Story::new(
            Synopsis::new("fox", "Milo", "find his way home"),
            "Storybook Story",
            "https://example.com/final.png",
        )
    }

    #[test]
    fn test_allocation_matches_paragraphs() {
        let mut story = sample_story();
        story.set_narrative("First line.\n\nSecond line.\nThird line.\n");
        story.allocate_pages();

        assert_eq!(story.paragraphs().len(), 3);
        assert_eq!(story.page_count(), story.paragraphs().len());
        for (i, page) in story.pages().iter().enumerate() {
            assert_eq!(page.paragraph(), story.paragraphs()[i]);
        }
    }

    #[test]
    fn test_fresh_story_uses_defaults() {
        let story = sample_story();
        assert_eq!(story.title(), "Storybook Story");
        assert_eq!(story.cover_image_url(), "https://example.com/final.png");
        assert!(!story.is_complete());
    }

    #[test]
    fn test_page_stage_progression() {
        let mut page = Page::new("A paragraph.");
        assert!(!page.is_published());

        page.set_illustration_brief("A fox under a tree.");
        page.set_image_prompt("a fox under a tree as a watercolor");
        page.set_local_image_path(PathBuf::from("images/x/0.png"));
        page.set_public_image_url("https://cdn.example.com/0.png");

        assert!(page.is_published());
        assert_eq!(page.illustration_brief(), Some("A fox under a tree."));
    }

    #[test]
    fn test_story_complete_only_when_all_pages_published() {
        let mut story = sample_story();
        story.set_narrative("One.\nTwo.");
        story.allocate_pages();
        assert!(!story.is_complete());

        for i in 0..story.page_count() {
            let mut page = story.pages()[i].clone();
            page.set_illustration_brief("b");
            page.set_image_prompt("p");
            page.set_local_image_path(PathBuf::from("x.png"));
            page.set_public_image_url("https://cdn.example.com/x.png");
            story.set_page(i, page);
        }
        assert!(story.is_complete());
    }

    #[test]
    fn test_page_ids_are_distinct() {
        let mut story = sample_story();
        story.set_narrative("One.\nTwo.");
        story.allocate_pages();
        assert_ne!(story.pages()[0].id(), story.pages()[1].id());
    }
}
