//! Streaming chat-completions client implementing [`GenerationSource`].
//!
//! Opens a `stream: true` chat completion and forwards the raw body chunks
//! over a channel. Chunk boundaries are whatever the transport delivers;
//! line framing is the pipeline's concern, not this adapter's.

use crate::config::GenerationConfig;
use async_trait::async_trait;
use futures::StreamExt;
use namescout_application::ports::generation::{ChunkStream, GenerationError, GenerationSource};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Descriptions longer than this are cut before prompting.
const MAX_DESCRIPTION_LEN: usize = 100;

/// Capacity of the chunk-forwarding channel.
const CHUNK_CAPACITY: usize = 16;

/// Generation source backed by an OpenAI-style chat-completions endpoint.
pub struct OpenAiGenerationSource {
    client: reqwest::Client,
    config: GenerationConfig,
}

impl OpenAiGenerationSource {
    pub fn new(client: reqwest::Client, config: GenerationConfig) -> Self {
        Self { client, config }
    }
}

/// Build the suggestion prompt, capping the description length.
fn build_prompt(description: &str) -> String {
    let description: String = description.chars().take(MAX_DESCRIPTION_LEN).collect();
    format!(
        "List some suitable domain names for my project in CSV format. \
         Description of my project: \"{description}\""
    )
}

#[async_trait]
impl GenerationSource for OpenAiGenerationSource {
    async fn open(&self, description: &str) -> Result<ChunkStream, GenerationError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "stream": true,
            "messages": [{
                "role": "user",
                "content": build_prompt(description),
            }],
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Generation request rejected: {}", status);
            return Err(GenerationError::RequestFailed(status.as_u16()));
        }

        info!(model = %self.config.model, "Generation stream opened");

        let (tx, rx) = mpsc::channel(CHUNK_CAPACITY);
        tokio::spawn(async move {
            let mut chunks = response.bytes_stream();

            while let Some(chunk) = chunks.next().await {
                let message = match chunk {
                    Ok(bytes) => Ok(bytes.to_vec()),
                    Err(e) => Err(GenerationError::StreamError(e.to_string())),
                };
                let is_error = message.is_err();

                // A closed receiver means the pipeline stopped reading
                // (terminal sentinel); just stop forwarding.
                if tx.send(message).await.is_err() {
                    debug!("Chunk receiver dropped, abandoning generation body");
                    return;
                }
                if is_error {
                    return;
                }
            }
        });

        Ok(ChunkStream::new(rx))
    }
}
