//! Core domain types for yarrow.
//!
//! This crate contains the pure algebra of the draw: the four line states,
//! bits and sequences built from them, and the named hexagram/trigram
//! orderings. No IO, no logging.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod bit;
mod ordering;
mod sequence;
mod state;

pub use bit::Bit;
pub use ordering::{
    HEXAGRAM_COUNT, HexagramIndex, HexagramOrder, IndexOutOfRangeError, OrderParseError,
    OrderingTable, TRIGRAM_COUNT, TrigramIndex, TrigramOrder,
};
pub use sequence::{EmptySequenceError, PLANE_WIDTH, SUMMARY_LIMIT, Sequence};
pub use state::{InvalidStateError, State, Unit};
