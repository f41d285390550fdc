//! Infrastructure layer
//!
//! - Adapters: HTTP clients for the external collaborators, plus fake
//!   in-memory adapters used by tests
//! - CLI: interactive synopsis collection and console output

pub mod adapters;
pub mod cli;
