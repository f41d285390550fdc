//! Application layer
//!
//! - Ports: abstract interfaces to external collaborators
//! - Pipeline: page enrichment, cover pipeline, top-level driver
//! - Error: the fatal error taxonomy shared by all pipeline stages

pub mod error;
pub mod pipeline;
pub mod ports;

pub use error::PipelineError;
