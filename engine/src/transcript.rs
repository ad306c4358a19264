//! Transcript lines: a dot composition followed by free text.
//!
//! The first [`READING_WIDTH`] characters are the reading; its
//! whitespace-separated tokens are the rooms. Everything after is the tail,
//! carried through untouched.

use thiserror::Error;
use yarrow_types::{EmptySequenceError, Sequence};

use crate::house::{House, HouseError, HousePolicy};

/// Characters of a line that hold the composition.
pub const READING_WIDTH: usize = 51;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("line holds no rooms")]
    Blank,
    #[error("room '{room}' holds no states")]
    Room {
        room: String,
        #[source]
        source: EmptySequenceError,
    },
    #[error(transparent)]
    House(#[from] HouseError),
}

/// Extra columns written after a reformatted composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotations {
    /// ` w{real}>{imag} ` with King Wen numbers.
    pub wen: bool,
    /// ` {real}>{imag} ` with hexagram glyphs.
    pub glyph: bool,
    /// ` y{real:02o}>{imag:02o} ` with octal indices.
    pub yi: bool,
    /// Re-append the original tail.
    pub keep_tail: bool,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            wen: false,
            glyph: false,
            yi: false,
            keep_tail: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    house: House,
    tail: String,
}

impl TranscriptLine {
    pub fn parse(line: &str, policy: HousePolicy) -> Result<Self, TranscriptError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let split = line
            .char_indices()
            .nth(READING_WIDTH)
            .map_or(line.len(), |(at, _)| at);
        let (reading, tail) = line.split_at(split);

        let rooms = reading
            .split_whitespace()
            .map(|token| {
                Sequence::parse(token).map_err(|source| TranscriptError::Room {
                    room: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if rooms.is_empty() {
            return Err(TranscriptError::Blank);
        }

        Ok(Self {
            house: House::new(rooms, policy)?,
            tail: tail.to_string(),
        })
    }

    #[must_use]
    pub fn house(&self) -> &House {
        &self.house
    }

    #[must_use]
    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn render(&self, annotations: Annotations) -> Result<String, TranscriptError> {
        let mut out = self.house.composition()?;

        if annotations.wen || annotations.glyph || annotations.yi {
            let (real, imag) = self.house.hexagrams()?;
            if annotations.wen {
                out.push_str(&format!(" w{}>{} ", real.wen(), imag.wen()));
            }
            if annotations.glyph {
                out.push_str(&format!(" {}>{} ", real.glyph(), imag.glyph()));
            }
            if annotations.yi {
                out.push_str(&format!(
                    " y{:02o}>{:02o} ",
                    real.index().value(),
                    imag.index().value()
                ));
            }
        }

        let tail = self.tail.trim_end();
        if annotations.keep_tail && !tail.trim_start().is_empty() {
            if !out.ends_with(' ') && !tail.starts_with(char::is_whitespace) {
                out.push(' ');
            }
            out.push_str(tail);
        }
        Ok(out)
    }
}

/// Parse `line` and render it again with `annotations`.
pub fn reformat(
    line: &str,
    policy: HousePolicy,
    annotations: Annotations,
) -> Result<String, TranscriptError> {
    TranscriptLine::parse(line, policy)?.render(annotations)
}
