//! Reassembly of logical lines from arbitrarily-chunked bytes.

/// Reassembles newline-terminated lines from a chunked byte stream.
///
/// Chunk boundaries are arbitrary: a line may span several chunks, and one
/// chunk may carry several lines. Partial trailing data is held in an
/// internal buffer until a later chunk completes it.
///
/// Lines are only flushed when the current chunk ends with a newline. A
/// trailing line that never receives its terminator before the stream ends
/// stays buffered and is never emitted; this mirrors the upstream source's
/// framing, which always terminates records.
#[derive(Debug, Default)]
pub struct LineReassembler {
    incomplete: String,
}

impl LineReassembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw chunk, returning every complete non-blank line.
    ///
    /// The chunk is decoded lossily; the upstream protocol is ASCII-framed,
    /// so invalid UTF-8 can only occur inside a payload and is replaced
    /// rather than failing the stream.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let decoded = String::from_utf8_lossy(chunk);

        if !decoded.ends_with('\n') {
            self.incomplete.push_str(&decoded);
            return Vec::new();
        }

        let mut buffered = std::mem::take(&mut self.incomplete);
        buffered.push_str(&decoded);

        // Splitting on '\n' and dropping blanks collapses runs of
        // consecutive terminators.
        buffered
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Buffered partial data that has not yet seen a terminator.
    pub fn pending(&self) -> &str {
        &self.incomplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_chunk_single_line() {
        let mut reassembler = LineReassembler::new();
        assert_eq!(reassembler.feed(b"hello\n"), vec!["hello"]);
        assert!(reassembler.pending().is_empty());
    }

    #[test]
    fn line_split_across_chunks() {
        let mut reassembler = LineReassembler::new();
        assert!(reassembler.feed(b"hel").is_empty());
        assert_eq!(reassembler.pending(), "hel");
        assert_eq!(reassembler.feed(b"lo\n"), vec!["hello"]);
        assert!(reassembler.pending().is_empty());
    }

    #[test]
    fn multiple_lines_in_one_chunk() {
        let mut reassembler = LineReassembler::new();
        assert_eq!(reassembler.feed(b"one\ntwo\n"), vec!["one", "two"]);
    }

    #[test]
    fn consecutive_terminators_yield_no_blank_lines() {
        let mut reassembler = LineReassembler::new();
        assert_eq!(reassembler.feed(b"one\n\n\ntwo\n"), vec!["one", "two"]);
    }

    #[test]
    fn unterminated_tail_stays_buffered() {
        let mut reassembler = LineReassembler::new();
        assert_eq!(reassembler.feed(b"done\npart"), Vec::<String>::new());
        assert_eq!(reassembler.pending(), "done\npart");
    }

    #[test]
    fn buffered_tail_flushes_with_later_lines() {
        let mut reassembler = LineReassembler::new();
        assert!(reassembler.feed(b"one\npart").is_empty());
        assert_eq!(reassembler.feed(b"ial\ntwo\n"), vec!["one", "partial", "two"]);
    }

    #[test]
    fn whitespace_only_lines_are_dropped() {
        let mut reassembler = LineReassembler::new();
        assert_eq!(reassembler.feed(b"  \nreal\n"), vec!["real"]);
    }
}
