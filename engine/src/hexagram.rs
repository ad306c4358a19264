//! Naming a six-line index as a hexagram.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use yarrow_types::{HexagramIndex, HexagramOrder, IndexOutOfRangeError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexagramParseError {
    #[error("'{0}' is not a hexagram glyph, index, y-octal or w-position")]
    Unrecognized(String),
    #[error("position {0} is outside 1..=64")]
    Position(u64),
    #[error(transparent)]
    Index(#[from] IndexOutOfRangeError),
}

/// A hexagram identified by its binary index, numbered in one ordering
/// (King Wen unless told otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hexagram {
    index: HexagramIndex,
    numbering: HexagramOrder,
}

impl Hexagram {
    #[must_use]
    pub const fn new(index: HexagramIndex) -> Self {
        Self {
            index,
            numbering: HexagramOrder::KingWen,
        }
    }

    #[must_use]
    pub const fn with_numbering(mut self, numbering: HexagramOrder) -> Self {
        self.numbering = numbering;
        self
    }

    #[must_use]
    pub const fn index(self) -> HexagramIndex {
        self.index
    }

    #[must_use]
    pub const fn numbering(self) -> HexagramOrder {
        self.numbering
    }

    #[must_use]
    pub fn glyph(self) -> char {
        HexagramOrder::Yi.glyph(self.index)
    }

    /// 1-based position in the numbering ordering.
    #[must_use]
    pub fn position(self) -> u8 {
        self.numbering.position(self.index)
    }

    /// King Wen number regardless of numbering.
    #[must_use]
    pub fn wen(self) -> u8 {
        HexagramOrder::KingWen.position(self.index)
    }

    /// Accepts a glyph (`䷗`), a decimal index (`1`), an octal `y` index
    /// (`y01`) or a King Wen `w` position (`w24`).
    pub fn parse(raw: &str) -> Result<Self, HexagramParseError> {
        let trimmed = raw.trim();
        let unrecognized = || HexagramParseError::Unrecognized(trimmed.to_string());

        let mut chars = trimmed.chars();
        if let (Some(glyph), None) = (chars.next(), chars.next())
            && let Some(index) = HexagramOrder::Yi.index_of(glyph)
        {
            return Ok(Self::new(index));
        }

        if let Some(octal) = trimmed.strip_prefix('y') {
            let value = u64::from_str_radix(octal, 8).map_err(|_| unrecognized())?;
            return Ok(Self::new(HexagramIndex::new(value)?));
        }

        if let Some(position) = trimmed.strip_prefix('w') {
            let position: u64 = position.parse().map_err(|_| unrecognized())?;
            let slot = position
                .checked_sub(1)
                .and_then(|slot| HexagramIndex::new(slot).ok())
                .ok_or(HexagramParseError::Position(position))?;
            let glyph = HexagramOrder::KingWen.glyph(slot);
            let index = HexagramOrder::Yi.index_of(glyph).ok_or_else(unrecognized)?;
            return Ok(Self::new(index));
        }

        let value: u64 = trimmed.parse().map_err(|_| unrecognized())?;
        Ok(Self::new(HexagramIndex::new(value)?))
    }
}

impl From<HexagramIndex> for Hexagram {
    fn from(index: HexagramIndex) -> Self {
        Self::new(index)
    }
}

impl FromStr for Hexagram {
    type Err = HexagramParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} == y{:02o} == w{}",
            self.glyph(),
            self.index.value(),
            self.position()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexagram(value: u64) -> Hexagram {
        Hexagram::new(HexagramIndex::new(value).unwrap())
    }

    #[test]
    fn display_matches_name_format() {
        assert_eq!(hexagram(63).to_string(), "䷀ == y77 == w1");
        assert_eq!(hexagram(0).to_string(), "䷁ == y00 == w2");
        assert_eq!(hexagram(1).to_string(), "䷗ == y01 == w24");
    }

    #[test]
    fn numbering_changes_position_only() {
        let qian = hexagram(63).with_numbering(HexagramOrder::Yi);
        assert_eq!(qian.position(), 64);
        assert_eq!(qian.wen(), 1);
        assert_eq!(qian.glyph(), '䷀');
    }

    #[test]
    fn parse_every_form() {
        assert_eq!(Hexagram::parse("䷗").unwrap(), hexagram(1));
        assert_eq!(Hexagram::parse("y01").unwrap(), hexagram(1));
        assert_eq!(Hexagram::parse("w24").unwrap(), hexagram(1));
        assert_eq!(Hexagram::parse(" 63 ").unwrap(), hexagram(63));
        assert_eq!("y77".parse::<Hexagram>().unwrap(), hexagram(63));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(matches!(
            Hexagram::parse("64"),
            Err(HexagramParseError::Index(_))
        ));
        assert_eq!(
            Hexagram::parse("w0").unwrap_err(),
            HexagramParseError::Position(0)
        );
        assert_eq!(
            Hexagram::parse("w65").unwrap_err(),
            HexagramParseError::Position(65)
        );
        assert!(matches!(
            Hexagram::parse("y8"),
            Err(HexagramParseError::Unrecognized(_))
        ));
        assert!(Hexagram::parse("☰").is_err());
    }

    #[test]
    fn every_wen_position_round_trips() {
        for position in 1..=64u64 {
            let parsed = Hexagram::parse(&format!("w{position}")).unwrap();
            assert_eq!(u64::from(parsed.wen()), position);
        }
    }
}
