//! Text synthesis adapters

mod chat_client;
mod fake_text_client;

pub use chat_client::{ChatCompletionClient, ChatCompletionClientConfig};
pub use fake_text_client::FakeTextSynthesis;
