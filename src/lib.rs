//! Storydeck - illustrated storybook deck generator
//!
//! Architecture: Hexagonal (ports & adapters)
//!
//! Domain layer (domain/):
//! - Story aggregate (synopsis, narrative, pages)
//! - Paragraph extraction, prompt derivation
//! - Deck assembly engine (pure Story -> layout operations)
//!
//! Application layer (application/):
//! - Ports: TextSynthesisPort, ImageSynthesisPort, ArtifactPublisherPort, DeckRendererPort
//! - Pipeline: page enrichment, cover pipeline, top-level driver
//!
//! Infrastructure layer (infrastructure/):
//! - Adapters: chat-completion client, text-to-image client, object-store
//!   publisher, slides renderer client (plus fake adapters for tests)
//! - CLI: interactive synopsis collection

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
