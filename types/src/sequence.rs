//! Ordered, non-empty runs of bits ("rooms").
//!
//! A sequence keeps element order but its [`product`](Sequence::product) is
//! commutative. Two independent binary planes decode the sequence into
//! little-endian integers: bit `n` of [`real`](Sequence::real) is the real
//! projection of element `n`, and likewise for [`imag`](Sequence::imag).

use std::fmt;
use std::ops::{Add, Bound, Index, RangeBounds};
use std::str::FromStr;
use std::{slice, vec};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bit::Bit;

/// Element count after which [`Sequence::summary`] truncates.
pub const SUMMARY_LIMIT: usize = 20;

/// Number of positions the plane integers can hold. Elements past this
/// position do not contribute to [`Sequence::real`] or [`Sequence::imag`].
pub const PLANE_WIDTH: usize = u64::BITS as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sequence contains no valid bits")]
pub struct EmptySequenceError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence {
    bits: Vec<Bit>,
}

impl Sequence {
    pub fn new(bits: Vec<Bit>) -> Result<Self, EmptySequenceError> {
        if bits.is_empty() {
            Err(EmptySequenceError)
        } else {
            Ok(Self { bits })
        }
    }

    /// Build from any items that may convert into bits. Items that don't are
    /// dropped; only an empty result is an error.
    pub fn collect<I>(items: I) -> Result<Self, EmptySequenceError>
    where
        I: IntoIterator,
        I::Item: TryInto<Bit>,
    {
        Self::new(
            items
                .into_iter()
                .filter_map(|item| item.try_into().ok())
                .collect(),
        )
    }

    /// Parse glyph text. Characters that are not state aliases are skipped.
    pub fn parse(text: &str) -> Result<Self, EmptySequenceError> {
        Self::collect(text.chars())
    }

    /// Inverse of the plane decoding: position `n` gets the bit whose
    /// (`real`, `imag`) projections are bit `n` of each operand.
    ///
    /// `bit_length` defaults to the wider of the two operands.
    pub fn from_planes(
        real: u64,
        imag: u64,
        bit_length: Option<usize>,
    ) -> Result<Self, EmptySequenceError> {
        let width = |v: u64| (u64::BITS - v.leading_zeros()) as usize;
        let length = bit_length.unwrap_or_else(|| width(real).max(width(imag)));
        let plane_bit = |v: u64, pos: usize| {
            u32::try_from(pos)
                .ok()
                .and_then(|shift| v.checked_shr(shift))
                .is_some_and(|shifted| shifted & 1 == 1)
        };
        Self::new(
            (0..length)
                .map(|pos| Bit::from_planes(plane_bit(real, pos), plane_bit(imag, pos)))
                .collect(),
        )
    }

    #[must_use]
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    #[must_use]
    pub fn into_bits(self) -> Vec<Bit> {
        self.bits
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Bit> {
        self.bits.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.bits.get(index).copied()
    }

    #[must_use]
    pub fn first(&self) -> Bit {
        self.bits[0]
    }

    #[must_use]
    pub fn last(&self) -> Bit {
        self.bits[self.bits.len() - 1]
    }

    /// Left-to-right multiplicative reduction of every element.
    #[must_use]
    pub fn product(&self) -> Bit {
        self.bits.iter().fold(Bit::YANG, |acc, bit| acc * *bit)
    }

    /// Real plane: bit `n` is set when element `n` is Yang or OldYang.
    ///
    /// Only the first [`PLANE_WIDTH`] elements are encoded; longer
    /// sequences are truncated, see [`Sequence::fits_planes`].
    #[must_use]
    pub fn real(&self) -> u64 {
        self.plane(Bit::real)
    }

    /// Imaginary plane: bit `n` is set when element `n` is Yang or OldYin.
    /// Truncated to [`PLANE_WIDTH`] elements like [`Sequence::real`].
    #[must_use]
    pub fn imag(&self) -> u64 {
        self.plane(Bit::imag)
    }

    /// Whether [`Sequence::real`] and [`Sequence::imag`] encode every element.
    #[must_use]
    pub fn fits_planes(&self) -> bool {
        self.bits.len() <= PLANE_WIDTH
    }

    fn plane(&self, project: fn(Bit) -> bool) -> u64 {
        self.bits
            .iter()
            .take(PLANE_WIDTH)
            .enumerate()
            .filter(|(_, bit)| project(**bit))
            .fold(0, |acc, (n, _)| acc | (1u64 << n))
    }

    /// Sub-sequence over `range`, clamped to the sequence bounds.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<Self, EmptySequenceError> {
        let len = self.bits.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);
        if start >= end {
            return Err(EmptySequenceError);
        }
        Self::new(self.bits[start..end].to_vec())
    }

    /// Every `step`-th element starting at `start`.
    pub fn stride(&self, start: usize, step: usize) -> Result<Self, EmptySequenceError> {
        Self::new(
            self.bits
                .iter()
                .skip(start)
                .step_by(step.max(1))
                .copied()
                .collect(),
        )
    }

    /// New sequence holding `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &Sequence) -> Sequence {
        let mut bits = Vec::with_capacity(self.len() + other.len());
        bits.extend_from_slice(&self.bits);
        bits.extend_from_slice(&other.bits);
        Self { bits }
    }

    /// Split off the final element. The head is `None` for single-element
    /// sequences.
    #[must_use]
    pub fn split_last(&self) -> (Option<Sequence>, Bit) {
        let head = self.slice(..self.len() - 1).ok();
        (head, self.last())
    }

    /// `"{product}={glyphs}"`, truncated after [`SUMMARY_LIMIT`] elements.
    #[must_use]
    pub fn summary(&self) -> String {
        let glyphs: String = self.bits.iter().take(SUMMARY_LIMIT).map(|b| b.glyph()).collect();
        if self.len() > SUMMARY_LIMIT {
            format!("{}={glyphs}…(+{})", self.product(), self.len() - SUMMARY_LIMIT)
        } else {
            format!("{}={glyphs}", self.product())
        }
    }
}

impl From<Bit> for Sequence {
    fn from(bit: Bit) -> Self {
        Self { bits: vec![bit] }
    }
}

impl Index<usize> for Sequence {
    type Output = Bit;

    fn index(&self, index: usize) -> &Bit {
        &self.bits[index]
    }
}

impl Add for Sequence {
    type Output = Sequence;

    fn add(mut self, rhs: Sequence) -> Sequence {
        self.bits.extend(rhs.bits);
        self
    }
}

impl Add<&Sequence> for &Sequence {
    type Output = Sequence;

    fn add(self, rhs: &Sequence) -> Sequence {
        self.concat(rhs)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Bit;
    type IntoIter = slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Bit;
    type IntoIter = vec::IntoIter<Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl FromStr for Sequence {
    type Err = EmptySequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = EmptySequenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Sequence> for String {
    fn from(value: Sequence) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}
