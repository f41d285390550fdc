//! Pipeline Driver
//!
//! Top-level orchestration: narrative synthesis, paragraph segmentation,
//! concurrent fan-out of the cover pipeline and the per-page pipelines, join,
//! deck assembly, renderer handoff.
//!
//! Failure policy: the first fatal error aborts the batch. Dropping the page
//! JoinSet aborts in-flight siblings at their next await point, so no deck is
//! ever assembled from an incomplete story.

use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::application::error::PipelineError;
use crate::application::ports::{
    ArtifactPublisherPort, DeckHandle, DeckRendererPort, ImageSynthesisPort, TextSynthesisPort,
};
use crate::config::AppConfig;
use crate::domain::deck::{assemble, ClosingSlideSpec};
use crate::domain::morale;
use crate::domain::prompt;
use crate::domain::story::{Page, Story, Synopsis};

use super::cover::CoverPipeline;
use super::page::PageEnricher;

/// Top-level story pipeline
pub struct StoryPipeline {
    text: Arc<dyn TextSynthesisPort>,
    renderer: Arc<dyn DeckRendererPort>,
    enricher: PageEnricher,
    cover: CoverPipeline,
    closing: ClosingSlideSpec,
    default_title: String,
    max_concurrent: usize,
}

impl StoryPipeline {
    pub fn new(
        config: &AppConfig,
        text: Arc<dyn TextSynthesisPort>,
        image: Arc<dyn ImageSynthesisPort>,
        publisher: Arc<dyn ArtifactPublisherPort>,
        renderer: Arc<dyn DeckRendererPort>,
    ) -> Self {
        let enricher = PageEnricher::new(
            text.clone(),
            image.clone(),
            publisher.clone(),
            &config.storage,
            &config.pipeline,
        );
        let cover = CoverPipeline::new(text.clone(), image, publisher, &config.storage);

        Self {
            text,
            renderer,
            enricher,
            cover,
            closing: ClosingSlideSpec {
                image_url: config.deck.closing_image_url.clone(),
                link_url: config.deck.project_url.clone(),
            },
            default_title: config.deck.default_title.clone(),
            max_concurrent: config.pipeline.max_concurrent,
        }
    }

    /// Run the whole pipeline for one premise and hand the assembled deck to
    /// the renderer.
    pub async fn run(&self, synopsis: Synopsis) -> Result<DeckHandle, PipelineError> {
        let mut story = Story::new(synopsis, &self.default_title, &self.closing.image_url);
        tracing::info!(story_id = %story.id(), "Starting story pipeline");

        println!("Let me think about how this story will go...");
        let narrative = self
            .text
            .complete(&prompt::narrative_prompt(story.synopsis()))
            .await?;
        println!("Okay. I think I have an idea.");

        println!("Let me edit it real quick...");
        story.set_narrative(narrative);
        if story.paragraphs().is_empty() {
            return Err(PipelineError::ResponseShape(
                "narrative contained no paragraphs".to_string(),
            ));
        }
        story.allocate_pages();
        tracing::info!(
            story_id = %story.id(),
            pages = story.page_count(),
            "Narrative segmented"
        );

        println!("Sweet. I think this could use some creative touches. Give me a moment...");
        let (pages, assets) = tokio::try_join!(
            self.enrich_pages(&story),
            self.cover.run(story.id(), story.synopsis(), story.narrative()),
        )?;
        println!("I think I've thought of a pretty good title");

        for (index, page) in pages {
            story.set_page(index, page);
        }
        story.set_title(assets.title);
        story.set_cover_image_url(assets.cover_image_url);
        debug_assert!(story.is_complete());

        println!("Ah! That's perfect! Let me just put the finishing touches on it...");
        let ops = assemble(&story, &self.closing);
        let handle = self.renderer.render(story.title(), &ops).await?;

        tracing::info!(
            story_id = %story.id(),
            presentation_id = %handle.presentation_id,
            "Deck rendered"
        );

        Ok(handle)
    }

    /// Fan out one task per paragraph, bounded by the configured concurrency
    /// limit (0 keeps one task per paragraph). Each task owns its disjoint
    /// output slot; results are written back by index at the join point.
    async fn enrich_pages(&self, story: &Story) -> Result<Vec<(usize, Page)>, PipelineError> {
        let count = story.page_count();
        let capacity = if self.max_concurrent == 0 {
            count
        } else {
            self.max_concurrent
        };
        let semaphore = Arc::new(Semaphore::new(capacity));

        let mut tasks: JoinSet<Result<(usize, Page), PipelineError>> = JoinSet::new();
        for (index, paragraph) in story.paragraphs().iter().cloned().enumerate() {
            let enricher = self.enricher.clone();
            let semaphore = semaphore.clone();
            let story_id = story.id();
            let synopsis = story.synopsis().clone();

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| PipelineError::TaskAborted(e.to_string()))?;
                let page = enricher.enrich(story_id, &synopsis, index, &paragraph).await?;
                Ok((index, page))
            });
        }

        let mut pages = Vec::with_capacity(count);
        while let Some(joined) = tasks.join_next().await {
            let (index, page) =
                joined.map_err(|e| PipelineError::TaskAborted(e.to_string()))??;
            println!("{}", morale::random_exclamation());
            pages.push((index, page));
        }

        Ok(pages)
    }
}
