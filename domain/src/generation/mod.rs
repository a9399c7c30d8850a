//! Incremental consumption of the generated text stream.
//!
//! The generation source delivers raw byte chunks whose boundaries carry no
//! meaning. [`LineReassembler`](lines::LineReassembler) turns chunks into
//! complete logical lines, [`parse_line`](event::parse_line) classifies each
//! line as a [`GenerationEvent`](event::GenerationEvent), and
//! [`Transcript`](transcript::Transcript) accumulates the delta fragments
//! into the full generated text.

pub mod event;
pub mod lines;
pub mod transcript;

pub use event::{GenerationEvent, parse_line};
pub use lines::LineReassembler;
pub use transcript::Transcript;
