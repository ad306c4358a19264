//! Casting engine for yarrow.
//!
//! [`DrawEngine`] runs the pile casting and yields a [`Draw`]; a draw becomes
//! a [`House`] under a [`HousePolicy`], which renders compositions and names
//! hexagrams. [`TranscriptLine`] reads compositions back from text.

mod draw;
mod hexagram;
mod house;
mod observer;
mod transcript;

pub use draw::{
    Draw, DrawEngine, DrawError, InvalidHouseSeedError, PILE_SIZE, PileCounts, ROUNDS, RoundTrace,
};
pub use hexagram::{Hexagram, HexagramParseError};
pub use house::{CompositionStyle, House, HouseError, HousePolicy, INTENT_COLUMN, RoomOffsets};
pub use observer::{DrawObserver, TracingObserver};
pub use transcript::{Annotations, READING_WIDTH, TranscriptError, TranscriptLine, reformat};

pub use yarrow_types::{
    Bit, EmptySequenceError, HexagramIndex, HexagramOrder, IndexOutOfRangeError, Sequence, State,
};
