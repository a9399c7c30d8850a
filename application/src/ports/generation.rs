//! Generation source port
//!
//! Defines the interface to the generative text source. The source is an
//! opaque chunked byte producer: chunk boundaries carry no meaning, and
//! each logical record inside the stream is a newline-terminated line.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur while opening or reading the generation stream.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Generation request failed with status {0}")]
    RequestFailed(u16),

    #[error("Stream error: {0}")]
    StreamError(String),
}

/// Handle for receiving raw byte chunks from an open generation stream.
///
/// Wraps an `mpsc::Receiver` so the adapter can forward body chunks from a
/// background task while the pipeline consumes them at its own pace.
pub struct ChunkStream {
    pub receiver: mpsc::Receiver<Result<Vec<u8>, GenerationError>>,
}

impl ChunkStream {
    pub fn new(receiver: mpsc::Receiver<Result<Vec<u8>, GenerationError>>) -> Self {
        Self { receiver }
    }

    /// Receive the next chunk; `None` means the stream is exhausted.
    pub async fn next_chunk(&mut self) -> Option<Result<Vec<u8>, GenerationError>> {
        self.receiver.recv().await
    }
}

/// Port for the generative text source.
#[async_trait]
pub trait GenerationSource: Send + Sync {
    /// Start a generation for the given project description and return the
    /// raw chunk stream.
    async fn open(&self, description: &str) -> Result<ChunkStream, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn chunk_stream_yields_then_closes() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(Ok(b"abc".to_vec())).await.unwrap();
        drop(tx);

        let mut stream = ChunkStream::new(rx);
        assert_eq!(stream.next_chunk().await.unwrap().unwrap(), b"abc".to_vec());
        assert!(stream.next_chunk().await.is_none());
    }
}
