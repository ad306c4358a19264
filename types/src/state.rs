//! The four line states and their multiplicative algebra.
//!
//! Each state is a fourth root of unity. Multiplication is the cyclic group
//! of order 4 with [`State::Yang`] (`1 + 0i`) as the identity:
//!
//! ```text
//!   Yang     1      i^0
//!   OldYang  i      i^1
//!   Yin     -1      i^2
//!   OldYin  -i      i^3
//! ```
//!
//! Every textual or numeric representation a state accepts (names, ritual
//! line numbers, digrams, display glyphs, shorthand digits) is normalized
//! through one alias table into a canonical `State`.

use std::collections::HashMap;
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;
use std::sync::LazyLock;

use num_complex::Complex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complex unit value of a state. Both components are in `{-1, 0, 1}`.
pub type Unit = Complex<i8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum State {
    Yin,
    Yang,
    OldYin,
    OldYang,
}

const ALL_STATES: [State; 4] = [State::Yin, State::Yang, State::OldYin, State::OldYang];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid state value '{value}'")]
pub struct InvalidStateError {
    value: String,
}

impl InvalidStateError {
    #[must_use]
    pub fn new(value: impl fmt::Display) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Alias text -> state. Built once from each state's metadata.
static ALIAS_INDEX: LazyLock<HashMap<String, State>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for &state in &ALL_STATES {
        index.insert(state.name().to_string(), state);
        index.insert(state.lines().to_string(), state);
        index.insert(state.digram().to_string(), state);
        for glyph in state.glyphs() {
            index.insert(glyph.to_string(), state);
        }
        for alias in state.extra_aliases() {
            index.insert((*alias).to_string(), state);
        }
    }
    index
});

impl State {
    /// The multiplicative identity, `1 + 0i`.
    pub const IDENTITY: State = State::Yang;

    /// The four states, in declaration order. This is the only source other
    /// tables build from.
    #[must_use]
    pub const fn all() -> &'static [State; 4] {
        &ALL_STATES
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            State::Yin => "yin",
            State::Yang => "yang",
            State::OldYin => "old-yin",
            State::OldYang => "old-yang",
        }
    }

    #[must_use]
    pub const fn value(self) -> Unit {
        match self {
            State::Yin => Complex::new(-1, 0),
            State::Yang => Complex::new(1, 0),
            State::OldYin => Complex::new(0, -1),
            State::OldYang => Complex::new(0, 1),
        }
    }

    /// Ritual line number: 6 (old yin), 7 (yang), 8 (yin), 9 (old yang).
    #[must_use]
    pub const fn lines(self) -> u8 {
        match self {
            State::Yin => 8,
            State::Yang => 7,
            State::OldYin => 6,
            State::OldYang => 9,
        }
    }

    #[must_use]
    pub const fn digram(self) -> char {
        match self {
            State::Yin => '⚋',
            State::Yang => '⚊',
            State::OldYin => '⚍',
            State::OldYang => '⚎',
        }
    }

    /// Display glyphs. The first one is canonical.
    #[must_use]
    pub const fn glyphs(self) -> &'static [char] {
        match self {
            State::Yin => &['●'],
            State::Yang => &['ⵔ'],
            State::OldYin => &['ⴲ'],
            State::OldYang => &['ⴱ', 'ⵀ'],
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        self.glyphs()[0]
    }

    const fn extra_aliases(self) -> &'static [&'static str] {
        match self {
            State::Yin => &["⬤", "⚏", "•", "0", "2", "-"],
            State::Yang => &["○", "◯", "⚌", "⭕", "⭘", "1", "+"],
            State::OldYin => &["⊗", "⊕", "⨂", "⨶", "⨷", "⦻", "◉", "∗", "*", "4"],
            State::OldYang => &["⦵", "⦶", "⦸", "∅", "◎", "⊖", "3", "%", "i"],
        }
    }

    /// Power of `i` this state represents.
    const fn exponent(self) -> u8 {
        match self {
            State::Yang => 0,
            State::OldYang => 1,
            State::Yin => 2,
            State::OldYin => 3,
        }
    }

    const fn from_exponent(exponent: u8) -> State {
        match exponent & 3 {
            0 => State::Yang,
            1 => State::OldYang,
            2 => State::Yin,
            _ => State::OldYin,
        }
    }

    /// Real-plane projection: sign of the real part, or of the imaginary part
    /// when the real part is zero.
    #[must_use]
    pub const fn real(self) -> bool {
        let v = self.value();
        if v.re == 0 { v.im > 0 } else { v.re > 0 }
    }

    /// Imaginary-plane projection: sign of the real part, or of the negated
    /// imaginary part when the real part is zero.
    #[must_use]
    pub const fn imag(self) -> bool {
        let v = self.value();
        if v.re == 0 { v.im < 0 } else { v.re > 0 }
    }

    /// Inverse of the (`real`, `imag`) projections. Total: the four plane
    /// pairs are exactly the four states.
    #[must_use]
    pub const fn from_planes(real: bool, imag: bool) -> State {
        match (real, imag) {
            (false, false) => State::Yin,
            (true, true) => State::Yang,
            (true, false) => State::OldYang,
            (false, true) => State::OldYin,
        }
    }

    /// Look up the state whose complex value is exactly `value`.
    pub fn from_value(value: Unit) -> Result<State, InvalidStateError> {
        ALL_STATES
            .iter()
            .copied()
            .find(|state| state.value() == value)
            .ok_or_else(|| InvalidStateError::new(format!("{}{:+}i", value.re, value.im)))
    }

    /// Multiply the complex values and resolve the product by exact match.
    ///
    /// The `*` operator gives the same answer through the cyclic exponent and
    /// cannot fail; this is the checked route through the value table.
    pub fn checked_mul(self, rhs: State) -> Result<State, InvalidStateError> {
        State::from_value(self.value() * rhs.value())
    }

    /// Normalize any accepted representation into a state.
    pub fn resolve(raw: &str) -> Result<State, InvalidStateError> {
        let trimmed = raw.trim();
        if let Some(state) = ALIAS_INDEX.get(trimmed) {
            return Ok(*state);
        }
        ALIAS_INDEX
            .get(trimmed.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| InvalidStateError::new(trimmed))
    }

    pub fn from_char(c: char) -> Result<State, InvalidStateError> {
        let mut buf = [0u8; 4];
        ALIAS_INDEX
            .get(&*c.encode_utf8(&mut buf))
            .copied()
            .ok_or_else(|| InvalidStateError::new(c))
    }

    /// Every alias this state answers to, canonical glyph first.
    #[must_use]
    pub fn aliases(self) -> Vec<String> {
        let mut out: Vec<String> = self.glyphs().iter().map(char::to_string).collect();
        out.push(self.name().to_string());
        out.push(self.lines().to_string());
        out.push(self.digram().to_string());
        out.extend(self.extra_aliases().iter().map(ToString::to_string));
        out
    }
}

impl Mul for State {
    type Output = State;

    fn mul(self, rhs: State) -> State {
        State::from_exponent(self.exponent() + rhs.exponent())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for State {
    type Err = InvalidStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::resolve(s)
    }
}

impl TryFrom<Unit> for State {
    type Error = InvalidStateError;

    fn try_from(value: Unit) -> Result<Self, Self::Error> {
        State::from_value(value)
    }
}
