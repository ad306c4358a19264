//! A house: the ordered rooms of one casting.
//!
//! How a house is corrected and rendered is a [`HousePolicy`], not a type.
//! The default policy splits a nine-long fourth room and renders the
//! fixed-width dot composition; [`HousePolicy::ledger`] renders one line per
//! room instead.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use yarrow_types::{Bit, EmptySequenceError, HexagramIndex, IndexOutOfRangeError, Sequence, State};

use crate::hexagram::Hexagram;

/// Column at which the dot composition starts the intent room.
pub const INTENT_COLUMN: usize = 49;

/// Rooms read by the major projection and the dot offsets.
const SCORED_ROOMS: RangeInclusive<usize> = 1..=3;
const INTENT_ROOM: usize = 4;
const LONG_FOURTH_ROOM: usize = 9;
const MAJOR_STRIDE: usize = 4;
const BASE_LINE_LENGTH: i64 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HouseError {
    #[error("house has no rooms")]
    Empty,
    #[error("house needs at least {needed} rooms, has {actual}")]
    TooFewRooms { needed: usize, actual: usize },
    #[error(transparent)]
    Sequence(#[from] EmptySequenceError),
    #[error(transparent)]
    Index(#[from] IndexOutOfRangeError),
}

/// Spaces per room index for each room product in the dot composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOffsets {
    pub yang: usize,
    pub yin: usize,
    pub old_yang: usize,
    pub old_yin: usize,
}

impl RoomOffsets {
    #[must_use]
    pub const fn offset(&self, product: Bit) -> usize {
        match product.state() {
            State::Yang => self.yang,
            State::Yin => self.yin,
            State::OldYang => self.old_yang,
            State::OldYin => self.old_yin,
        }
    }
}

impl Default for RoomOffsets {
    fn default() -> Self {
        Self {
            yang: 1,
            yin: 2,
            old_yang: 3,
            old_yin: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionStyle {
    /// Start room, the three scored rooms shifted by product, then the
    /// intent room at a fixed column.
    Dot {
        offsets: RoomOffsets,
        intent_column: usize,
    },
    /// `"{room} {product}"` per room, then the house product.
    Ledger,
}

impl Default for CompositionStyle {
    fn default() -> Self {
        CompositionStyle::Dot {
            offsets: RoomOffsets::default(),
            intent_column: INTENT_COLUMN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HousePolicy {
    split_long_fourth_room: bool,
    style: CompositionStyle,
}

impl HousePolicy {
    #[must_use]
    pub fn ledger() -> Self {
        Self {
            split_long_fourth_room: false,
            style: CompositionStyle::Ledger,
        }
    }

    #[must_use]
    pub fn with_split_long_fourth_room(mut self, enabled: bool) -> Self {
        self.split_long_fourth_room = enabled;
        self
    }

    /// Move the intent column. No effect on the ledger style.
    #[must_use]
    pub fn with_intent_column(mut self, column: usize) -> Self {
        if let CompositionStyle::Dot { intent_column, .. } = &mut self.style {
            *intent_column = column;
        }
        self
    }

    #[must_use]
    pub fn with_offsets(mut self, offsets: RoomOffsets) -> Self {
        if let CompositionStyle::Dot { offsets: current, .. } = &mut self.style {
            *current = offsets;
        }
        self
    }

    #[must_use]
    pub const fn split_long_fourth_room(&self) -> bool {
        self.split_long_fourth_room
    }

    #[must_use]
    pub const fn style(&self) -> CompositionStyle {
        self.style
    }
}

impl Default for HousePolicy {
    fn default() -> Self {
        Self {
            split_long_fourth_room: true,
            style: CompositionStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    rooms: Vec<Sequence>,
    policy: HousePolicy,
}

impl House {
    /// Build a house, applying the policy's structural correction: with
    /// exactly four rooms and a fourth room nine long, the fourth room's
    /// last element becomes a fifth room.
    pub fn new(mut rooms: Vec<Sequence>, policy: HousePolicy) -> Result<Self, HouseError> {
        if rooms.is_empty() {
            return Err(HouseError::Empty);
        }
        if policy.split_long_fourth_room
            && rooms.len() == 4
            && rooms[3].len() == LONG_FOURTH_ROOM
            && let Some(fourth) = rooms.pop()
        {
            let (head, last) = fourth.split_last();
            rooms.extend(head);
            rooms.push(Sequence::from(last));
        }
        Ok(Self { rooms, policy })
    }

    #[must_use]
    pub fn rooms(&self) -> &[Sequence] {
        &self.rooms
    }

    #[must_use]
    pub fn into_rooms(self) -> Vec<Sequence> {
        self.rooms
    }

    #[must_use]
    pub const fn policy(&self) -> &HousePolicy {
        &self.policy
    }

    /// Product of every room's product.
    #[must_use]
    pub fn product(&self) -> Bit {
        self.rooms
            .iter()
            .fold(Bit::YANG, |acc, room| acc * room.product())
    }

    pub fn composition(&self) -> Result<String, HouseError> {
        match self.policy.style {
            CompositionStyle::Dot {
                offsets,
                intent_column,
            } => self.dot_composition(offsets, intent_column),
            CompositionStyle::Ledger => Ok(self.ledger_composition()),
        }
    }

    /// The intent starts at `intent_column` unless the rooms before it
    /// already reach that column. Then it follows after a single space, one
    /// column later than a bare concatenation would put it, so the rooms
    /// stay whitespace-separated for transcript parsing.
    fn dot_composition(
        &self,
        offsets: RoomOffsets,
        intent_column: usize,
    ) -> Result<String, HouseError> {
        let intent = self.require(INTENT_ROOM)?;

        let mut line = self.rooms[0].to_string();
        for (i, room) in self.scored_rooms()?.iter().enumerate() {
            let shift = offsets.offset(room.product()) * (i + 1);
            line.push_str(&" ".repeat(shift));
            line.push_str(&room.to_string());
        }

        let width = line.chars().count();
        let padding = intent_column.saturating_sub(width).max(1);
        line.push_str(&" ".repeat(padding));
        line.push_str(&intent.to_string());
        Ok(line)
    }

    fn ledger_composition(&self) -> String {
        let mut out = String::new();
        for room in &self.rooms {
            out.push_str(&format!("{room} {}\n", room.product()));
        }
        out.push_str(&self.product().to_string());
        out
    }

    /// Six bits from the three scored rooms: per room, the product of the
    /// elements at stride offsets {0, 1}, then of those at {2, 3}. A half
    /// with no elements contributes the identity.
    pub fn major(&self) -> Result<Sequence, HouseError> {
        let mut lines = Vec::with_capacity(6);
        for room in self.scored_rooms()? {
            lines.push(interleaved_product(room, [0, 1]));
            lines.push(interleaved_product(room, [2, 3]));
        }
        Ok(Sequence::new(lines)?)
    }

    /// The hexagrams named by the major projection's real and imaginary
    /// planes.
    pub fn hexagrams(&self) -> Result<(Hexagram, Hexagram), HouseError> {
        let major = self.major()?;
        Ok((
            Hexagram::new(HexagramIndex::new(major.real())?),
            Hexagram::new(HexagramIndex::new(major.imag())?),
        ))
    }

    /// `12 - (len(r1) + len(r2) + len(r3)) / 4`.
    pub fn line_length(&self) -> Result<i64, HouseError> {
        let scored: usize = self.scored_rooms()?.iter().map(Sequence::len).sum();
        Ok(BASE_LINE_LENGTH - (scored / MAJOR_STRIDE) as i64)
    }

    fn scored_rooms(&self) -> Result<&[Sequence], HouseError> {
        self.require(*SCORED_ROOMS.end())?;
        Ok(&self.rooms[SCORED_ROOMS])
    }

    fn require(&self, index: usize) -> Result<&Sequence, HouseError> {
        self.rooms.get(index).ok_or(HouseError::TooFewRooms {
            needed: index + 1,
            actual: self.rooms.len(),
        })
    }
}

fn interleaved_product(room: &Sequence, starts: [usize; 2]) -> Bit {
    starts
        .into_iter()
        .filter_map(|start| room.stride(start, MAJOR_STRIDE).ok())
        .fold(Bit::YANG, |acc, part| acc * part.product())
}
