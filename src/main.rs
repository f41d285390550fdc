//! Storydeck - illustrated storybook deck generator
//!
//! Hexagonal architecture:
//! - Domain: story aggregate, prompt derivation, deck assembly
//! - Application: ports, pipeline (page enrichment, cover, driver)
//! - Infrastructure: HTTP adapters, console frontend

use std::sync::Arc;

use storydeck::application::pipeline::StoryPipeline;
use storydeck::config::{load_config, print_config};
use storydeck::infrastructure::adapters::{
    ChatCompletionClient, ChatCompletionClientConfig, HttpArtifactPublisher,
    HttpArtifactPublisherConfig, SlidesRendererClient, SlidesRendererClientConfig,
    StabilityImageClient, StabilityImageClientConfig,
};
use storydeck::infrastructure::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (priority: environment > config file > defaults)
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // Initialize logging; log.debug escalates the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.log.filter_directive())
            }),
        )
        .init();

    print_config(&config);

    // Ensure the image scratch directory exists
    tokio::fs::create_dir_all(&config.storage.images_dir).await?;

    // Build the upstream adapters
    let text = Arc::new(ChatCompletionClient::new(ChatCompletionClientConfig::from(
        &config.text,
    ))?);
    let image = Arc::new(StabilityImageClient::new(StabilityImageClientConfig::from(
        &config.image,
    ))?);
    let publisher = Arc::new(HttpArtifactPublisher::new(
        HttpArtifactPublisherConfig::from(&config.publish),
    )?);
    let renderer = Arc::new(SlidesRendererClient::new(SlidesRendererClientConfig::from(
        &config.renderer,
    ))?);

    let pipeline = StoryPipeline::new(&config, text, image, publisher, renderer);

    cli::print_banner();
    let synopsis = cli::collect_synopsis()?;

    let handle = pipeline.run(synopsis).await?;
    tracing::info!(presentation_id = %handle.presentation_id, "Story complete");

    cli::print_closing();

    Ok(())
}
