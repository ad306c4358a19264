//! The pile casting.
//!
//! A pile of 50 states is shuffled, one element is set aside as the intent,
//! and three rounds split, shuffle and harvest the rest:
//!
//! 1. shuffle the pile and split it at a uniform point in `4..len-4`
//! 2. shuffle each half and pop one element off the right half (the start on
//!    round one, otherwise the head of that round's room)
//! 3. from each half harvest a tail of `len % 4` elements, or 4 when that is
//!    zero, and rejoin the rest as the next pile
//!
//! The rooms of the resulting house are `[start, round 1, round 2, round 3,
//! intent]`.

use std::iter;

use rand::seq::SliceRandom;
use rand::{Rng, RngExt};
use thiserror::Error;
use yarrow_types::{Bit, EmptySequenceError, Sequence, State};

use crate::house::{House, HouseError, HousePolicy};
use crate::observer::DrawObserver;

/// Elements in a ritual pile.
pub const PILE_SIZE: usize = 50;
pub const ROUNDS: usize = 3;
/// Minimum elements on each side of a split.
const MIN_HALF: usize = 4;
const HARVEST_MODULUS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("seed pile has {actual} elements, the ritual needs exactly {expected}")]
pub struct InvalidHouseSeedError {
    actual: usize,
    expected: usize,
}

impl InvalidHouseSeedError {
    #[must_use]
    pub const fn new(actual: usize) -> Self {
        Self {
            actual,
            expected: PILE_SIZE,
        }
    }

    #[must_use]
    pub const fn actual(&self) -> usize {
        self.actual
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("pile ran out during round {round}")]
    PileExhausted { round: usize },
    #[error("pile of {len} cannot be split in round {round}")]
    PileTooSmall { round: usize, len: usize },
    #[error(transparent)]
    Sequence(#[from] EmptySequenceError),
}

/// How many of each state go into the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PileCounts {
    yin: usize,
    yang: usize,
    old_yang: usize,
    old_yin: usize,
}

impl PileCounts {
    pub fn new(
        yin: usize,
        yang: usize,
        old_yang: usize,
        old_yin: usize,
    ) -> Result<Self, InvalidHouseSeedError> {
        // Counts come from user config; an overflowing sum saturates.
        let total = [yin, yang, old_yang, old_yin]
            .into_iter()
            .try_fold(0usize, usize::checked_add)
            .unwrap_or(usize::MAX);
        if total != PILE_SIZE {
            return Err(InvalidHouseSeedError::new(total));
        }
        Ok(Self {
            yin,
            yang,
            old_yang,
            old_yin,
        })
    }

    #[must_use]
    pub const fn count(&self, state: State) -> usize {
        match state {
            State::Yin => self.yin,
            State::Yang => self.yang,
            State::OldYang => self.old_yang,
            State::OldYin => self.old_yin,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.yin + self.yang + self.old_yang + self.old_yin
    }

    /// The unshuffled pile: yins, yangs, old yangs, old yins.
    #[must_use]
    pub fn pile(&self) -> Vec<Bit> {
        [State::Yin, State::Yang, State::OldYang, State::OldYin]
            .into_iter()
            .flat_map(|state| iter::repeat_n(Bit::new(state), self.count(state)))
            .collect()
    }
}

impl Default for PileCounts {
    fn default() -> Self {
        Self {
            yin: 22,
            yang: 16,
            old_yang: 9,
            old_yin: 3,
        }
    }
}

/// What one round did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrace {
    round: usize,
    pile_len: usize,
    split: usize,
    left_remainder: usize,
    right_remainder: usize,
    popped: Bit,
    room: Sequence,
}

impl RoundTrace {
    /// 1-based.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn pile_len(&self) -> usize {
        self.pile_len
    }

    #[must_use]
    pub const fn split(&self) -> usize {
        self.split
    }

    #[must_use]
    pub const fn left_remainder(&self) -> usize {
        self.left_remainder
    }

    #[must_use]
    pub const fn right_remainder(&self) -> usize {
        self.right_remainder
    }

    /// Element popped off the right half: the start on round one.
    #[must_use]
    pub const fn popped(&self) -> Bit {
        self.popped
    }

    /// Harvested room. Empty-room rounds do not exist; round one's room
    /// holds only the two remainders.
    #[must_use]
    pub fn room(&self) -> &Sequence {
        &self.room
    }
}

/// A completed casting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    start: Bit,
    rounds: Vec<RoundTrace>,
    intent: Bit,
    remaining: Vec<Bit>,
}

impl Draw {
    #[must_use]
    pub const fn start(&self) -> Bit {
        self.start
    }

    #[must_use]
    pub const fn intent(&self) -> Bit {
        self.intent
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundTrace] {
        &self.rounds
    }

    /// Pile left over after the last round.
    #[must_use]
    pub fn remaining(&self) -> &[Bit] {
        &self.remaining
    }

    /// `[start, round 1, round 2, round 3, intent]`.
    #[must_use]
    pub fn rooms(&self) -> Vec<Sequence> {
        let mut rooms = Vec::with_capacity(ROUNDS + 2);
        rooms.push(Sequence::from(self.start));
        rooms.extend(self.rounds.iter().map(|round| round.room.clone()));
        rooms.push(Sequence::from(self.intent));
        rooms
    }

    pub fn into_house(self, policy: HousePolicy) -> Result<House, HouseError> {
        House::new(self.rooms(), policy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawEngine {
    pile: Vec<Bit>,
}

impl DrawEngine {
    #[must_use]
    pub fn new(counts: PileCounts) -> Self {
        Self { pile: counts.pile() }
    }

    /// Use an explicit seed pile. It must hold exactly [`PILE_SIZE`]
    /// elements.
    pub fn from_pile(pile: Vec<Bit>) -> Result<Self, InvalidHouseSeedError> {
        if pile.len() != PILE_SIZE {
            return Err(InvalidHouseSeedError::new(pile.len()));
        }
        Ok(Self { pile })
    }

    #[must_use]
    pub fn pile(&self) -> &[Bit] {
        &self.pile
    }

    pub fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Draw, DrawError> {
        self.play_observed(rng, &mut ())
    }

    pub fn play_observed<R, O>(&self, rng: &mut R, observer: &mut O) -> Result<Draw, DrawError>
    where
        R: Rng + ?Sized,
        O: DrawObserver + ?Sized,
    {
        let mut pile = self.pile.clone();
        pile.shuffle(rng);
        let intent = pile.pop().ok_or(DrawError::PileExhausted { round: 0 })?;
        observer.intent_drawn(intent);

        let mut start = None;
        let mut rounds = Vec::with_capacity(ROUNDS);
        for round in 1..=ROUNDS {
            pile.shuffle(rng);
            let pile_len = pile.len();
            if pile_len <= 2 * MIN_HALF {
                return Err(DrawError::PileTooSmall {
                    round,
                    len: pile_len,
                });
            }
            let split = rng.random_range(MIN_HALF..pile_len - MIN_HALF);
            let mut right = pile.split_off(split);
            let mut left = pile;
            left.shuffle(rng);
            right.shuffle(rng);

            let popped = right.pop().ok_or(DrawError::PileExhausted { round })?;
            let mut score = Vec::new();
            if start.is_none() {
                start = Some(popped);
            } else {
                score.push(popped);
            }

            let left_remainder = harvest_len(left.len());
            let right_remainder = harvest_len(right.len());
            let score_left = left.split_off(left.len() - left_remainder);
            let score_right = right.split_off(right.len() - right_remainder);
            score.extend(score_left);
            score.extend(score_right);

            left.extend(right);
            pile = left;

            let trace = RoundTrace {
                round,
                pile_len,
                split,
                left_remainder,
                right_remainder,
                popped,
                room: Sequence::new(score)?,
            };
            observer.round_finished(&trace);
            rounds.push(trace);
        }

        let draw = Draw {
            start: start.ok_or(DrawError::PileExhausted { round: 1 })?,
            rounds,
            intent,
            remaining: pile,
        };
        observer.draw_finished(&draw);
        Ok(draw)
    }
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::new(PileCounts::default())
    }
}

/// `len % 4`, or 4 when that is zero, capped at `len`.
fn harvest_len(len: usize) -> usize {
    match len % HARVEST_MODULUS {
        0 => HARVEST_MODULUS.min(len),
        rest => rest,
    }
}
