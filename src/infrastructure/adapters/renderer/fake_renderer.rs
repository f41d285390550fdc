//! Fake Deck Renderer (for tests)

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{DeckHandle, DeckRendererPort, RenderError};
use crate::domain::deck::DeckOp;

/// Records the last render call instead of talking to a presentation service
pub struct FakeDeckRenderer {
    last: Mutex<Option<(String, Vec<DeckOp>)>>,
}

impl FakeDeckRenderer {
    pub fn new() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }

    /// Title and operation list of the last render, if any
    pub fn last_render(&self) -> Option<(String, Vec<DeckOp>)> {
        self.last.lock().unwrap().clone()
    }
}

impl Default for FakeDeckRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeckRendererPort for FakeDeckRenderer {
    async fn render(&self, title: &str, ops: &[DeckOp]) -> Result<DeckHandle, RenderError> {
        *self.last.lock().unwrap() = Some((title.to_string(), ops.to_vec()));
        Ok(DeckHandle {
            presentation_id: "fake-presentation".to_string(),
        })
    }
}
