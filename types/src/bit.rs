//! A single occurrence of a state.

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use rand::seq::IndexedRandom;
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

use crate::state::{InvalidStateError, State, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bit(State);

impl Bit {
    pub const YIN: Bit = Bit(State::Yin);
    pub const YANG: Bit = Bit(State::Yang);
    pub const OLD_YIN: Bit = Bit(State::OldYin);
    pub const OLD_YANG: Bit = Bit(State::OldYang);

    #[must_use]
    pub const fn new(state: State) -> Self {
        Self(state)
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidStateError> {
        State::resolve(raw).map(Self)
    }

    pub fn from_value(value: Unit) -> Result<Self, InvalidStateError> {
        State::from_value(value).map(Self)
    }

    #[must_use]
    pub const fn from_planes(real: bool, imag: bool) -> Self {
        Self(State::from_planes(real, imag))
    }

    /// Uniformly pick one of the four states.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let states = State::all();
        Self(states[rng.random_range(0..states.len())])
    }

    #[must_use]
    pub const fn state(self) -> State {
        self.0
    }

    #[must_use]
    pub const fn value(self) -> Unit {
        self.0.value()
    }

    #[must_use]
    pub const fn real(self) -> bool {
        self.0.real()
    }

    #[must_use]
    pub const fn imag(self) -> bool {
        self.0.imag()
    }

    /// Canonical display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0.glyph()
    }

    /// One of the state's display glyphs, picked with `rng`.
    pub fn display_glyph<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        self.0
            .glyphs()
            .choose(rng)
            .copied()
            .unwrap_or_else(|| self.glyph())
    }

    pub fn checked_mul(self, rhs: Bit) -> Result<Bit, InvalidStateError> {
        self.0.checked_mul(rhs.0).map(Self)
    }
}

impl Mul for Bit {
    type Output = Bit;

    fn mul(self, rhs: Bit) -> Bit {
        Bit(self.0 * rhs.0)
    }
}

impl From<State> for Bit {
    fn from(state: State) -> Self {
        Self(state)
    }
}

impl From<Bit> for State {
    fn from(bit: Bit) -> Self {
        bit.0
    }
}

impl TryFrom<char> for Bit {
    type Error = InvalidStateError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        State::from_char(c).map(Self)
    }
}

impl TryFrom<&str> for Bit {
    type Error = InvalidStateError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl TryFrom<Unit> for Bit {
    type Error = InvalidStateError;

    fn try_from(value: Unit) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<(u8, u8)> for Bit {
    type Error = InvalidStateError;

    /// Accepts a `(real, imag)` digit pair where each digit is 0 or 1.
    fn try_from((real, imag): (u8, u8)) -> Result<Self, Self::Error> {
        match (real, imag) {
            (0 | 1, 0 | 1) => Ok(Self::from_planes(real == 1, imag == 1)),
            _ => Err(InvalidStateError::new(format!("({real}, {imag})"))),
        }
    }
}

impl FromStr for Bit {
    type Err = InvalidStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
