//! Cover Pipeline
//!
//! Produces the deck title and the cover illustration. The two sub-tasks run
//! concurrently and are both joined before deck assembly begins.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;

use crate::application::error::PipelineError;
use crate::application::ports::{
    ArtifactPublisherPort, ImageSynthesisPort, TextSynthesisPort, WeightedPrompt,
};
use crate::config::StorageConfig;
use crate::domain::prompt;
use crate::domain::story::{StoryId, Synopsis};

/// Output of the cover pipeline
#[derive(Debug, Clone)]
pub struct CoverAssets {
    pub title: String,
    pub cover_image_url: String,
}

/// Title + cover illustration worker
#[derive(Clone)]
pub struct CoverPipeline {
    text: Arc<dyn TextSynthesisPort>,
    image: Arc<dyn ImageSynthesisPort>,
    publisher: Arc<dyn ArtifactPublisherPort>,
    images_dir: PathBuf,
}

impl CoverPipeline {
    pub fn new(
        text: Arc<dyn TextSynthesisPort>,
        image: Arc<dyn ImageSynthesisPort>,
        publisher: Arc<dyn ArtifactPublisherPort>,
        storage: &StorageConfig,
    ) -> Self {
        Self {
            text,
            image,
            publisher,
            images_dir: storage.images_dir.clone(),
        }
    }

    /// Run both cover sub-tasks concurrently and join them
    pub async fn run(
        &self,
        story_id: StoryId,
        synopsis: &Synopsis,
        narrative: &str,
    ) -> Result<CoverAssets, PipelineError> {
        let (title, cover_image_url) = tokio::try_join!(
            self.derive_title(synopsis, narrative),
            self.derive_cover_image(story_id, synopsis),
        )?;

        tracing::info!(story_id = %story_id, title = %title, "Cover pipeline complete");

        Ok(CoverAssets {
            title,
            cover_image_url,
        })
    }

    /// Ask for a title in the required `TITLE: "..."` format and extract it.
    /// A response that does not match the format is a structural violation,
    /// never a best-effort guess.
    async fn derive_title(
        &self,
        synopsis: &Synopsis,
        narrative: &str,
    ) -> Result<String, PipelineError> {
        let response = self
            .text
            .complete(&prompt::title_prompt(synopsis, narrative))
            .await?;
        let title = prompt::extract_title(&response)?;
        Ok(title)
    }

    /// Derive a cover concept, render it in the fixed cover style with text
    /// suppression, persist it under the story's "cover" slot, and publish it.
    async fn derive_cover_image(
        &self,
        story_id: StoryId,
        synopsis: &Synopsis,
    ) -> Result<String, PipelineError> {
        let concept = self
            .text
            .complete(&prompt::cover_concept_prompt(synopsis))
            .await?;
        let cover_prompt = prompt::cover_image_prompt(&concept);

        let rendered = self
            .image
            .render(&[
                WeightedPrompt::positive(cover_prompt),
                WeightedPrompt::negative(prompt::NEGATIVE_IMAGE_TERM),
            ])
            .await?;

        let story_dir = self.images_dir.join(story_id.to_string());
        fs::create_dir_all(&story_dir).await?;
        let image_path = story_dir.join("cover.png");
        fs::write(&image_path, &rendered.bytes).await?;

        let key = super::upload_key(story_id, "cover");
        let public_url = self.publisher.publish(&image_path, &key).await?;

        Ok(public_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{
        FakeArtifactPublisher, FakeImageSynthesis, FakeTextSynthesis,
    };

    fn pipeline(
        text: Arc<FakeTextSynthesis>,
        image: Arc<FakeImageSynthesis>,
        publisher: Arc<FakeArtifactPublisher>,
        images_dir: PathBuf,
    ) -> CoverPipeline {
        CoverPipeline::new(text, image, publisher, &StorageConfig { images_dir })
    }

    #[tokio::test]
    async fn test_cover_pipeline_produces_title_and_url() {
        let dir = tempfile::tempdir().unwrap();
        let image = Arc::new(FakeImageSynthesis::new());
        let cover = pipeline(
            Arc::new(FakeTextSynthesis::new()),
            image.clone(),
            Arc::new(FakeArtifactPublisher::new()),
            dir.path().to_path_buf(),
        );

        let story_id = StoryId::new();
        let synopsis = Synopsis::new("fox", "Milo", "find his way home");
        let assets = cover.run(story_id, &synopsis, "A narrative.").await.unwrap();

        assert_eq!(assets.title, "The Brave Fox");
        assert_eq!(
            assets.cover_image_url,
            format!("https://cdn.example.com/DOCTOR_SLIDES_{}_cover.png", story_id)
        );

        // the cover render carried the suppression term
        let prompts = image.rendered_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].len(), 2);
        assert!(prompts[0][0].text.starts_with("in the style of a watercolor childrens book."));
        assert_eq!(prompts[0][1].weight, -1);

        // the cover image landed in the story's fixed slot
        assert!(dir
            .path()
            .join(story_id.to_string())
            .join("cover.png")
            .exists());
    }

    #[tokio::test]
    async fn test_malformed_title_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let text = Arc::new(FakeTextSynthesis::new().with_title_response("A Title Without Quotes"));
        let cover = pipeline(
            text,
            Arc::new(FakeImageSynthesis::new()),
            Arc::new(FakeArtifactPublisher::new()),
            dir.path().to_path_buf(),
        );

        let story_id = StoryId::new();
        let synopsis = Synopsis::new("fox", "Milo", "find his way home");
        let result = cover.run(story_id, &synopsis, "A narrative.").await;

        assert!(matches!(result, Err(PipelineError::ResponseShape(_))));
    }
}
