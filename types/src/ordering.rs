//! Named orderings of the 64 hexagrams and the 8 trigrams.
//!
//! Each ordering is a fixed permutation of the same glyph set. Position `n`
//! of an ordering holds one glyph; the inverse map takes a glyph back to its
//! position. The [`Yi`](HexagramOrder::Yi) ordering is the binary one: its
//! position `n` is the figure whose lines, bottom first, are the bits of `n`
//! (set bit = yang line).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Glyph tables
// ============================================================================

const HEXAGRAMS_YI: &str = "䷁䷗䷆䷒䷎䷣䷭䷊䷏䷲䷧䷵䷽䷶䷟䷡䷇䷂䷜䷻䷦䷾䷯䷄䷬䷐䷮䷹䷞䷰䷛䷪䷖䷚䷃䷨䷳䷕䷑䷙䷢䷔䷿䷥䷷䷝䷱䷍䷓䷩䷺䷼䷴䷤䷸䷈䷋䷘䷅䷉䷠䷌䷫䷀";
const HEXAGRAMS_FUXI: &str = "䷀䷪䷍䷡䷈䷄䷙䷊䷉䷹䷥䷵䷼䷻䷨䷒䷌䷰䷝䷶䷤䷾䷕䷣䷘䷐䷔䷲䷩䷂䷚䷗䷫䷛䷱䷟䷸䷯䷑䷭䷅䷮䷿䷧䷺䷜䷃䷆䷠䷞䷷䷽䷴䷦䷳䷎䷋䷬䷢䷏䷓䷇䷖䷁";
const HEXAGRAMS_KING_WEN: &str = "䷀䷁䷂䷃䷄䷅䷆䷇䷈䷉䷊䷋䷌䷍䷎䷏䷐䷑䷒䷓䷔䷕䷖䷗䷘䷙䷚䷛䷜䷝䷞䷟䷠䷡䷢䷣䷤䷥䷦䷧䷨䷩䷪䷫䷬䷭䷮䷯䷰䷱䷲䷳䷴䷵䷶䷷䷸䷹䷺䷻䷼䷽䷾䷿";
const HEXAGRAMS_MAWANGDUI: &str = "䷀䷋䷠䷉䷅䷌䷘䷫䷳䷙䷖䷨䷃䷕䷚䷑䷜䷄䷇䷦䷻䷾䷂䷯䷲䷡䷏䷽䷵䷧䷶䷟䷁䷊䷎䷒䷆䷣䷗䷭䷹䷪䷬䷞䷮䷰䷐䷛䷝䷍䷢䷷䷥䷿䷔䷱䷸䷈䷓䷴䷼䷺䷤䷩";
const HEXAGRAMS_JING_FANG: &str = "䷀䷫䷠䷋䷓䷖䷢䷍䷲䷏䷧䷟䷭䷯䷛䷐䷜䷻䷂䷾䷰䷶䷣䷆䷳䷕䷙䷨䷥䷉䷼䷴䷁䷗䷒䷊䷡䷪䷄䷇䷸䷈䷤䷩䷘䷔䷚䷑䷝䷷䷱䷿䷃䷺䷅䷌䷹䷮䷬䷞䷦䷎䷽䷵";
const HEXAGRAMS_SHAO_YONG: &str = "䷁䷖䷇䷓䷏䷢䷬䷋䷎䷳䷦䷴䷽䷷䷞䷠䷆䷃䷜䷺䷧䷿䷮䷅䷭䷑䷯䷸䷟䷱䷛䷫䷗䷚䷂䷩䷲䷔䷐䷘䷣䷕䷾䷤䷶䷝䷰䷌䷒䷨䷻䷼䷵䷥䷹䷉䷊䷙䷄䷈䷡䷍䷪䷀";
const HEXAGRAMS_SIU: &str = "䷀䷫䷌䷉䷈䷍䷪䷠䷘䷼䷙䷡䷅䷤䷥䷄䷸䷝䷹䷱䷰䷛䷋䷩䷨䷊䷺䷕䷵䷴䷔䷻䷑䷶䷷䷐䷟䷞䷮䷯䷾䷿䷓䷚䷒䷃䷣䷳䷲䷢䷂䷭䷽䷬䷜䷦䷧䷗䷆䷎䷏䷇䷖䷁";

const TRIGRAMS_YI: &str = "☷☳☵☱☶☲☴☰";
const TRIGRAMS_FUXI: &str = "☰☴☵☶☷☳☲☱";
const TRIGRAMS_KING_WEN: &str = "☲☷☱☰☵☶☳☴";
const TRIGRAMS_DESIGNORI_CAMPBELL: &str = "☷☳☵☴☰☶☲☱";

pub const HEXAGRAM_COUNT: usize = 64;
pub const TRIGRAM_COUNT: usize = 8;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is outside 0..{size}")]
pub struct IndexOutOfRangeError {
    index: u64,
    size: usize,
}

impl IndexOutOfRangeError {
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ordering '{raw}'; expected one of: {expected:?}")]
pub struct OrderParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl OrderParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

// ============================================================================
// OrderingTable
// ============================================================================

/// One ordering: position -> glyph and glyph -> position.
#[derive(Debug)]
pub struct OrderingTable<const N: usize> {
    glyphs: [char; N],
    positions: HashMap<char, u8>,
}

impl<const N: usize> OrderingTable<N> {
    fn build(text: &str) -> Self {
        let mut glyphs = ['\0'; N];
        for (slot, glyph) in glyphs.iter_mut().zip(text.chars()) {
            *slot = glyph;
        }
        let positions = glyphs
            .iter()
            .enumerate()
            .map(|(position, glyph)| (*glyph, position as u8))
            .collect();
        Self { glyphs, positions }
    }

    #[must_use]
    pub fn glyphs(&self) -> &[char; N] {
        &self.glyphs
    }

    #[must_use]
    pub fn position_of(&self, glyph: char) -> Option<u8> {
        self.positions.get(&glyph).copied()
    }
}

static HEXAGRAM_TABLES: LazyLock<[OrderingTable<HEXAGRAM_COUNT>; 7]> =
    LazyLock::new(|| HexagramOrder::ALL.map(|order| OrderingTable::build(order.text())));

static TRIGRAM_TABLES: LazyLock<[OrderingTable<TRIGRAM_COUNT>; 4]> =
    LazyLock::new(|| TrigramOrder::ALL.map(|order| OrderingTable::build(order.text())));

// ============================================================================
// Hexagrams
// ============================================================================

/// A validated six-line figure index, `0..64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HexagramIndex(u8);

impl HexagramIndex {
    pub fn new(value: u64) -> Result<Self, IndexOutOfRangeError> {
        if value < HEXAGRAM_COUNT as u64 {
            Ok(Self(value as u8))
        } else {
            Err(IndexOutOfRangeError {
                index: value,
                size: HEXAGRAM_COUNT,
            })
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = HexagramIndex> {
        (0..HEXAGRAM_COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for HexagramIndex {
    type Error = IndexOutOfRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u64::from(value))
    }
}

impl From<HexagramIndex> for u8 {
    fn from(index: HexagramIndex) -> Self {
        index.0
    }
}

impl fmt::Display for HexagramIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HexagramOrder {
    /// Binary order: position `n` is the figure whose line bits spell `n`.
    #[default]
    Yi,
    Fuxi,
    KingWen,
    Mawangdui,
    JingFang,
    ShaoYong,
    Siu,
}

const HEXAGRAM_ORDER_PARSE_VALUES: &[&str] = &[
    "yi",
    "y",
    "fuxi",
    "king-wen",
    "wen",
    "mawangdui",
    "jing-fang",
    "jingfang",
    "shao-yong",
    "shaoyong",
    "siu",
];

impl HexagramOrder {
    pub const ALL: [HexagramOrder; 7] = [
        HexagramOrder::Yi,
        HexagramOrder::Fuxi,
        HexagramOrder::KingWen,
        HexagramOrder::Mawangdui,
        HexagramOrder::JingFang,
        HexagramOrder::ShaoYong,
        HexagramOrder::Siu,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HexagramOrder::Yi => "yi",
            HexagramOrder::Fuxi => "fuxi",
            HexagramOrder::KingWen => "king-wen",
            HexagramOrder::Mawangdui => "mawangdui",
            HexagramOrder::JingFang => "jing-fang",
            HexagramOrder::ShaoYong => "shao-yong",
            HexagramOrder::Siu => "siu",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            HexagramOrder::Yi => "Yi",
            HexagramOrder::Fuxi => "Fuxi",
            HexagramOrder::KingWen => "King Wen",
            HexagramOrder::Mawangdui => "Mawangdui",
            HexagramOrder::JingFang => "Jing Fang",
            HexagramOrder::ShaoYong => "Shao Yong",
            HexagramOrder::Siu => "Siu",
        }
    }

    const fn text(self) -> &'static str {
        match self {
            HexagramOrder::Yi => HEXAGRAMS_YI,
            HexagramOrder::Fuxi => HEXAGRAMS_FUXI,
            HexagramOrder::KingWen => HEXAGRAMS_KING_WEN,
            HexagramOrder::Mawangdui => HEXAGRAMS_MAWANGDUI,
            HexagramOrder::JingFang => HEXAGRAMS_JING_FANG,
            HexagramOrder::ShaoYong => HEXAGRAMS_SHAO_YONG,
            HexagramOrder::Siu => HEXAGRAMS_SIU,
        }
    }

    pub fn parse(s: &str) -> Result<Self, OrderParseError> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().replace('_', "-").as_str() {
            "yi" | "y" => Ok(HexagramOrder::Yi),
            "fuxi" => Ok(HexagramOrder::Fuxi),
            "king-wen" | "kingwen" | "wen" => Ok(HexagramOrder::KingWen),
            "mawangdui" => Ok(HexagramOrder::Mawangdui),
            "jing-fang" | "jingfang" => Ok(HexagramOrder::JingFang),
            "shao-yong" | "shaoyong" => Ok(HexagramOrder::ShaoYong),
            "siu" => Ok(HexagramOrder::Siu),
            _ => Err(OrderParseError {
                raw: trimmed.to_string(),
                expected: HEXAGRAM_ORDER_PARSE_VALUES,
            }),
        }
    }

    #[must_use]
    pub fn table(self) -> &'static OrderingTable<HEXAGRAM_COUNT> {
        &HEXAGRAM_TABLES[self as usize]
    }

    /// Glyph at `index` in this ordering.
    #[must_use]
    pub fn glyph(self, index: HexagramIndex) -> char {
        self.table().glyphs[index.0 as usize]
    }

    /// Position of `glyph` in this ordering, if it is a hexagram at all.
    #[must_use]
    pub fn index_of(self, glyph: char) -> Option<HexagramIndex> {
        self.table().position_of(glyph).map(HexagramIndex)
    }

    /// 1-based position in this ordering of the figure whose binary value is
    /// `index` (e.g. its King Wen number).
    #[must_use]
    pub fn position(self, index: HexagramIndex) -> u8 {
        self.table()
            .position_of(HexagramOrder::Yi.glyph(index))
            .map_or(0, |position| position + 1)
    }
}

impl FromStr for HexagramOrder {
    type Err = OrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexagramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Trigrams
// ============================================================================

/// A validated three-line figure index, `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrigramIndex(u8);

impl TrigramIndex {
    pub fn new(value: u64) -> Result<Self, IndexOutOfRangeError> {
        if value < TRIGRAM_COUNT as u64 {
            Ok(Self(value as u8))
        } else {
            Err(IndexOutOfRangeError {
                index: value,
                size: TRIGRAM_COUNT,
            })
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = TrigramIndex> {
        (0..TRIGRAM_COUNT as u8).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrigramOrder {
    #[default]
    Yi,
    Fuxi,
    KingWen,
    DesignoriCampbell,
}

const TRIGRAM_ORDER_PARSE_VALUES: &[&str] = &["yi", "fuxi", "king-wen", "designori-campbell"];

impl TrigramOrder {
    pub const ALL: [TrigramOrder; 4] = [
        TrigramOrder::Yi,
        TrigramOrder::Fuxi,
        TrigramOrder::KingWen,
        TrigramOrder::DesignoriCampbell,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TrigramOrder::Yi => "yi",
            TrigramOrder::Fuxi => "fuxi",
            TrigramOrder::KingWen => "king-wen",
            TrigramOrder::DesignoriCampbell => "designori-campbell",
        }
    }

    const fn text(self) -> &'static str {
        match self {
            TrigramOrder::Yi => TRIGRAMS_YI,
            TrigramOrder::Fuxi => TRIGRAMS_FUXI,
            TrigramOrder::KingWen => TRIGRAMS_KING_WEN,
            TrigramOrder::DesignoriCampbell => TRIGRAMS_DESIGNORI_CAMPBELL,
        }
    }

    pub fn parse(s: &str) -> Result<Self, OrderParseError> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().replace('_', "-").as_str() {
            "yi" | "y" => Ok(TrigramOrder::Yi),
            "fuxi" => Ok(TrigramOrder::Fuxi),
            "king-wen" | "wen" => Ok(TrigramOrder::KingWen),
            "designori-campbell" | "desig" => Ok(TrigramOrder::DesignoriCampbell),
            _ => Err(OrderParseError {
                raw: trimmed.to_string(),
                expected: TRIGRAM_ORDER_PARSE_VALUES,
            }),
        }
    }

    #[must_use]
    pub fn table(self) -> &'static OrderingTable<TRIGRAM_COUNT> {
        &TRIGRAM_TABLES[self as usize]
    }

    #[must_use]
    pub fn glyph(self, index: TrigramIndex) -> char {
        self.table().glyphs[index.0 as usize]
    }

    #[must_use]
    pub fn index_of(self, glyph: char) -> Option<TrigramIndex> {
        self.table().position_of(glyph).map(TrigramIndex)
    }

    #[must_use]
    pub fn position(self, index: TrigramIndex) -> u8 {
        self.table()
            .position_of(TrigramOrder::Yi.glyph(index))
            .map_or(0, |position| position + 1)
    }
}

impl FromStr for TrigramOrder {
    type Err = OrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
