//! Stream Domains use case.
//!
//! Orchestrates the full suggestion pipeline for one request: read raw
//! chunks from the generation source, reassemble lines, parse events,
//! accumulate the transcript, extract fresh candidates, and fan out one
//! availability lookup per candidate batch while the generation is still
//! in flight. Available results are framed and flushed to the output
//! stream in settlement order; the stream closes exactly once, after every
//! lookup has settled plus a short grace delay.

use crate::matcher_cache::{MatcherCache, MatcherInitError};
use crate::ports::availability::AvailabilityLookup;
use crate::ports::generation::{ChunkStream, GenerationError, GenerationSource};
use crate::ports::suffixes::SuffixSource;
use crate::use_cases::sink;
use namescout_domain::{
    CandidateTracker, DomainAvailability, DomainMatcher, GenerationEvent, LineReassembler,
    Transcript, parse_line,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Trailing delay before the output stream closes, giving just-settled
/// flushes time to reach the transport.
const FLUSH_GRACE: Duration = Duration::from_millis(100);

/// Capacity of the output channel; each entry is one framed batch.
const OUTPUT_CAPACITY: usize = 32;

/// Errors that abort the request before any streaming starts.
///
/// Failures after the stream is open never surface here: lookup failures
/// degrade to optimistic records and upstream stream errors simply end the
/// read loop.
#[derive(Error, Debug)]
pub enum StreamDomainsError {
    #[error("Matcher initialization failed: {0}")]
    MatcherInit(#[from] MatcherInitError),

    #[error("Generation source error: {0}")]
    Generation(#[from] GenerationError),
}

/// Input for the [`StreamDomainsUseCase`].
#[derive(Debug, Clone)]
pub struct StreamDomainsInput {
    /// Free-form description of the project to suggest names for.
    pub description: String,
}

impl StreamDomainsInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Handle for consuming the output stream of one request.
///
/// Each received item is one complete framed flush (whole records only).
/// The channel closing means the request is finished: every lookup has
/// settled and no further bytes will arrive.
pub struct DomainStreamHandle {
    pub receiver: mpsc::Receiver<Vec<u8>>,
}

impl DomainStreamHandle {
    pub fn new(receiver: mpsc::Receiver<Vec<u8>>) -> Self {
        Self { receiver }
    }

    /// Receive the next framed flush; `None` means the stream has closed.
    pub async fn next_flush(&mut self) -> Option<Vec<u8>> {
        self.receiver.recv().await
    }

    /// Consume the stream and concatenate every flush.
    pub async fn collect_bytes(mut self) -> Vec<u8> {
        let mut all = Vec::new();
        while let Some(flush) = self.receiver.recv().await {
            all.extend_from_slice(&flush);
        }
        all
    }
}

/// Use case for streaming available domain suggestions.
pub struct StreamDomainsUseCase {
    source: Arc<dyn GenerationSource>,
    lookup: Arc<dyn AvailabilityLookup>,
    suffixes: Arc<dyn SuffixSource>,
    matcher_cache: Arc<MatcherCache>,
}

impl StreamDomainsUseCase {
    pub fn new(
        source: Arc<dyn GenerationSource>,
        lookup: Arc<dyn AvailabilityLookup>,
        suffixes: Arc<dyn SuffixSource>,
    ) -> Self {
        Self {
            source,
            lookup,
            suffixes,
            matcher_cache: Arc::new(MatcherCache::new()),
        }
    }

    /// Share a process-wide matcher cache across use-case instances.
    pub fn with_matcher_cache(mut self, cache: Arc<MatcherCache>) -> Self {
        self.matcher_cache = cache;
        self
    }

    /// Start one request and return the consumer-facing output handle.
    ///
    /// Matcher initialization and opening the generation stream happen
    /// before this returns; both failures are fatal for the request. The
    /// pipeline itself runs on a spawned task and reports nothing but
    /// bytes through the handle.
    pub async fn execute(
        &self,
        input: StreamDomainsInput,
    ) -> Result<DomainStreamHandle, StreamDomainsError> {
        let matcher = self
            .matcher_cache
            .get_or_build(self.suffixes.as_ref())
            .await?;

        let chunks = self.source.open(&input.description).await?;

        info!("Generation stream open, starting suggestion pipeline");

        let (tx, rx) = mpsc::channel(OUTPUT_CAPACITY);
        let lookup = Arc::clone(&self.lookup);
        tokio::spawn(Self::drive(matcher, chunks, lookup, tx));

        Ok(DomainStreamHandle::new(rx))
    }

    /// Per-request driver: sequential chunk/line/event processing with
    /// concurrent lookup settlement.
    async fn drive(
        matcher: Arc<DomainMatcher>,
        mut chunks: ChunkStream,
        lookup: Arc<dyn AvailabilityLookup>,
        output: mpsc::Sender<Vec<u8>>,
    ) {
        let mut reassembler = LineReassembler::new();
        let mut transcript = Transcript::new();
        let mut tracker = CandidateTracker::new();

        // In-flight lookups; the completion barrier below drains this.
        let mut pending: JoinSet<()> = JoinSet::new();

        'read: while let Some(chunk) = chunks.next_chunk().await {
            let chunk = match chunk {
                Ok(bytes) => bytes,
                Err(e) => {
                    // Already-emitted output stays valid; stop reading and
                    // let the barrier drain in-flight lookups.
                    warn!("Generation stream error: {}", e);
                    break 'read;
                }
            };

            for line in reassembler.feed(&chunk) {
                match parse_line(&line) {
                    Some(GenerationEvent::Terminal) => {
                        debug!("Terminal sentinel received");
                        break 'read;
                    }
                    Some(GenerationEvent::Delta(fragment)) => {
                        let full_text = transcript.append(&fragment);
                        let batch = tracker.extract_new(&matcher, full_text);
                        if batch.is_empty() {
                            continue;
                        }

                        debug!("Discovered {} new candidates", batch.len());
                        let lookup = Arc::clone(&lookup);
                        let output = output.clone();
                        pending.spawn(Self::settle_batch(lookup, batch, output));
                    }
                    Some(GenerationEvent::Malformed) => {
                        debug!("Skipping malformed line: {}", line);
                    }
                    None => {}
                }
            }
        }

        debug!(
            "Read loop finished: {} candidates extracted, awaiting pending lookups",
            tracker.len()
        );

        // Completion barrier: every issued lookup settles before close.
        while let Some(result) = pending.join_next().await {
            if let Err(e) = result {
                warn!("Task join error: {}", e);
            }
        }

        tokio::time::sleep(FLUSH_GRACE).await;

        info!("Suggestion stream complete");
        // `output` drops here: the channel closes exactly once.
    }

    /// Resolve one candidate batch and flush its available records.
    async fn settle_batch(
        lookup: Arc<dyn AvailabilityLookup>,
        batch: Vec<String>,
        output: mpsc::Sender<Vec<u8>>,
    ) {
        let records: Vec<DomainAvailability> = match lookup.check(&batch).await {
            Ok(records) => records.into_iter().filter(|r| r.available).collect(),
            Err(e) => {
                // Optimistic degradation: better to let the consumer
                // re-verify than to drop a real candidate on the floor.
                warn!("Availability lookup degraded for {} names: {}", batch.len(), e);
                batch.into_iter().map(DomainAvailability::optimistic).collect()
            }
        };

        if records.is_empty() {
            return;
        }

        match sink::encode_batch(&records) {
            // Ignore a closed channel: the consumer went away, but the
            // lookup still settled for the barrier's bookkeeping.
            Ok(bytes) => {
                let _ = output.send(bytes).await;
            }
            Err(e) => {
                warn!("Failed to encode batch: {}", e);
            }
        }
    }
}
