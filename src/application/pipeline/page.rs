//! Page Enrichment
//!
//! Transforms a bare paragraph into a fully illustrated, publicly addressable
//! page. Each stage failure is fatal for the whole run; the enricher only
//! reports it, the driver aborts the batch.

use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;

use crate::application::error::PipelineError;
use crate::application::ports::{
    ArtifactPublisherPort, ImageSynthesisPort, TextSynthesisPort, WeightedPrompt,
};
use crate::config::{PipelineConfig, StorageConfig};
use crate::domain::prompt;
use crate::domain::story::{Page, StoryId, Synopsis};

/// Per-page enrichment worker
#[derive(Clone)]
pub struct PageEnricher {
    text: Arc<dyn TextSynthesisPort>,
    image: Arc<dyn ImageSynthesisPort>,
    publisher: Arc<dyn ArtifactPublisherPort>,
    images_dir: PathBuf,
    pacing_min_secs: u64,
    pacing_max_secs: u64,
}

impl PageEnricher {
    pub fn new(
        text: Arc<dyn TextSynthesisPort>,
        image: Arc<dyn ImageSynthesisPort>,
        publisher: Arc<dyn ArtifactPublisherPort>,
        storage: &StorageConfig,
        pipeline: &PipelineConfig,
    ) -> Self {
        Self {
            text,
            image,
            publisher,
            images_dir: storage.images_dir.clone(),
            pacing_min_secs: pipeline.pacing_min_secs,
            pacing_max_secs: pipeline.pacing_max_secs,
        }
    }

    /// Enrich one paragraph into a published page.
    ///
    /// Stages, strictly in order: pacing sleep, illustration brief, image
    /// prompt, render + persist, publish.
    pub async fn enrich(
        &self,
        story_id: StoryId,
        synopsis: &Synopsis,
        index: usize,
        paragraph: &str,
    ) -> Result<Page, PipelineError> {
        self.pace().await;

        let mut page = Page::new(paragraph);
        tracing::debug!(story_id = %story_id, page = index, page_id = %page.id(), "Enriching page");

        // Illustration brief
        let brief_prompt = prompt::illustration_brief_prompt(synopsis, paragraph);
        let brief = self.text.complete(&brief_prompt).await?;
        page.set_illustration_brief(brief.clone());

        // Image prompt (styled, lowercased, name scrubbed)
        let image_prompt = prompt::derive_image_prompt(synopsis, &brief);
        page.set_image_prompt(image_prompt.clone());

        // Render and persist locally
        let rendered = self
            .image
            .render(&[WeightedPrompt::positive(image_prompt)])
            .await?;

        let story_dir = self.images_dir.join(story_id.to_string());
        fs::create_dir_all(&story_dir).await?;
        let image_path = story_dir.join(format!("{}.png", index));
        fs::write(&image_path, &rendered.bytes).await?;
        page.set_local_image_path(image_path.clone());

        // Publish
        let key = super::upload_key(story_id, &index.to_string());
        let public_url = self.publisher.publish(&image_path, &key).await?;
        page.set_public_image_url(public_url);

        tracing::info!(story_id = %story_id, page = index, "Page published");

        Ok(page)
    }

    /// Self-imposed pacing sleep before any network request, uniformly chosen
    /// from the configured bounds, to stay under upstream rate limits. Each
    /// page throttles independently; there is no shared limiter.
    async fn pace(&self) {
        let secs = {
            let mut rng = rand::thread_rng();
            rng.gen_range(self.pacing_min_secs..=self.pacing_max_secs)
        };
        if secs > 0 {
            tokio::time::sleep(Duration::from_secs(secs)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{
        FakeArtifactPublisher, FakeImageSynthesis, FakeTextSynthesis,
    };

    fn no_pacing() -> PipelineConfig {
        PipelineConfig {
            max_concurrent: 0,
            pacing_min_secs: 0,
            pacing_max_secs: 0,
        }
    }

    fn enricher_with(
        text: Arc<FakeTextSynthesis>,
        image: Arc<FakeImageSynthesis>,
        publisher: Arc<FakeArtifactPublisher>,
        images_dir: PathBuf,
    ) -> PageEnricher {
        PageEnricher::new(
            text,
            image,
            publisher,
            &StorageConfig { images_dir },
            &no_pacing(),
        )
    }

    #[tokio::test]
    async fn test_enrich_produces_published_page() {
        let dir = tempfile::tempdir().unwrap();
        let text = Arc::new(FakeTextSynthesis::new());
        let image = Arc::new(FakeImageSynthesis::new());
        let publisher = Arc::new(FakeArtifactPublisher::new());
        let enricher = enricher_with(
            text,
            image.clone(),
            publisher.clone(),
            dir.path().to_path_buf(),
        );

        let story_id = StoryId::new();
        let synopsis = Synopsis::new("fox", "Milo", "find his way home");
        let page = enricher
            .enrich(story_id, &synopsis, 0, "Milo set out at dawn.")
            .await
            .unwrap();

        assert!(page.is_published());
        assert!(page.local_image_path().unwrap().exists());
        assert_eq!(
            page.public_image_url().unwrap(),
            &format!(
                "https://cdn.example.com/DOCTOR_SLIDES_{}_0.png",
                story_id
            )
        );

        // the rendered prompt was the style-adjusted, name-scrubbed brief
        let prompts = image.rendered_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0][0].text.contains("watercolor"));
        assert!(!prompts[0][0].text.to_lowercase().contains("milo"));
    }

    #[tokio::test]
    async fn test_enrich_fails_fatally_on_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let text = Arc::new(FakeTextSynthesis::new());
        let image = Arc::new(FakeImageSynthesis::new().failing());
        let publisher = Arc::new(FakeArtifactPublisher::new());
        let enricher = enricher_with(
            text,
            image,
            publisher.clone(),
            dir.path().to_path_buf(),
        );

        let story_id = StoryId::new();
        let synopsis = Synopsis::new("fox", "Milo", "find his way home");
        let result = enricher
            .enrich(story_id, &synopsis, 0, "Milo set out at dawn.")
            .await;

        assert!(matches!(result, Err(PipelineError::UpstreamCall(_))));
        // nothing was published
        assert!(publisher.published_keys().is_empty());
    }

    #[tokio::test]
    async fn test_local_path_is_namespaced_by_story_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let enricher = enricher_with(
            Arc::new(FakeTextSynthesis::new()),
            Arc::new(FakeImageSynthesis::new()),
            Arc::new(FakeArtifactPublisher::new()),
            dir.path().to_path_buf(),
        );

        let story_id = StoryId::new();
        let synopsis = Synopsis::new("fox", "Milo", "find his way home");
        let page = enricher
            .enrich(story_id, &synopsis, 4, "A long walk.")
            .await
            .unwrap();

        let expected = dir
            .path()
            .join(story_id.to_string())
            .join("4.png");
        assert_eq!(page.local_image_path().unwrap(), &expected);
    }
}
