//! Classification of logical lines into generation events.
//!
//! Each line from the generation source is a server-sent-event record:
//! an optional `data: ` prefix followed by either a JSON completion chunk
//! carrying an incremental text fragment, or the `[DONE]` sentinel.

use serde::Deserialize;

/// Sentinel token marking the end of the generated stream.
const TERMINAL_SENTINEL: &str = "[DONE]";

/// An event parsed from one logical line of the generation stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// An incremental text fragment (may be empty).
    Delta(String),
    /// The terminal sentinel — no further lines or chunks should be read.
    Terminal,
    /// A line that could not be parsed as a completion chunk.
    ///
    /// Malformed records are dropped by the caller, never raised as
    /// failures.
    Malformed,
}

impl GenerationEvent {
    /// Returns the fragment text if this is a Delta event.
    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationEvent::Delta(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationEvent::Terminal)
    }
}

/// Wire shape of one streamed completion chunk.
#[derive(Debug, Deserialize)]
struct CompletionChunk {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

/// Parse one logical line into a [`GenerationEvent`].
///
/// Strips surrounding whitespace and a literal `data: ` prefix. Blank
/// lines yield `None`. A line containing the `[DONE]` sentinel yields
/// `Terminal`; anything that fails to parse as a completion chunk yields
/// `Malformed`.
pub fn parse_line(line: &str) -> Option<GenerationEvent> {
    let data = line.trim();
    if data.is_empty() {
        return None;
    }

    let data = data.strip_prefix("data: ").unwrap_or(data);

    if data.contains(TERMINAL_SENTINEL) {
        return Some(GenerationEvent::Terminal);
    }

    match serde_json::from_str::<CompletionChunk>(data) {
        Ok(chunk) => match chunk.choices.into_iter().next() {
            Some(choice) => Some(GenerationEvent::Delta(
                choice.delta.content.unwrap_or_default(),
            )),
            None => Some(GenerationEvent::Malformed),
        },
        Err(_) => Some(GenerationEvent::Malformed),
    }
}
