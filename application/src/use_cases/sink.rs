//! Wire framing for the output stream.
//!
//! The payload is a sequence of JSON-encoded availability records
//! separated by `|`, with a trailing `|` after the final unit of each
//! flush and no closing wrapper. The consumer splits on the delimiter and
//! parses each unit independently.

use namescout_domain::DomainAvailability;

/// Delimiter between serialized records.
pub const RECORD_DELIMITER: char = '|';

/// Serialize one batch of records into a single framed byte group.
///
/// Each call produces a self-consistent group of whole records, so a
/// single channel send of the returned bytes can never interleave partial
/// units with another flush.
pub fn encode_batch(records: &[DomainAvailability]) -> serde_json::Result<Vec<u8>> {
    let mut framed = String::new();

    for record in records {
        framed.push_str(&serde_json::to_string(record)?);
        framed.push(RECORD_DELIMITER);
    }

    Ok(framed.into_bytes())
}
