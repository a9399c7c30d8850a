//! Append-only accumulation of generated text.

/// The full generated text for one request, grown one fragment at a time.
///
/// The buffer is append-only and never truncated. Callers re-scan the
/// whole transcript after each append because a domain token can straddle
/// two fragments (a fragment ending in `exam` and the next beginning with
/// `ple.com`).
#[derive(Debug, Default)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment and return the full accumulated text.
    pub fn append(&mut self, fragment: &str) -> &str {
        self.text.push_str(fragment);
        &self.text
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_grows_monotonically() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.append("exam"), "exam");
        assert_eq!(transcript.append("ple.com"), "example.com");
        assert_eq!(transcript.as_str(), "example.com");
        assert_eq!(transcript.len(), 11);
    }

    #[test]
    fn empty_fragment_is_noop() {
        let mut transcript = Transcript::new();
        transcript.append("");
        assert!(transcript.is_empty());
    }
}
