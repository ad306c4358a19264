//! Command bodies, written against plain readers and writers.

use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;

use yarrow_config::Settings;
use yarrow_engine::{
    Annotations, DrawEngine, Hexagram, HexagramOrder, HousePolicy, TracingObserver, reformat,
};

#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub count: usize,
    pub hexagram: bool,
    /// Append each composition to this file as well.
    pub append: Option<PathBuf>,
}

pub fn play<R, W>(settings: &Settings, options: &PlayOptions, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    let engine = DrawEngine::new(settings.pile);
    let mut observer = TracingObserver;

    let mut log = match &options.append {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open {}", path.display()))?,
        ),
        None => None,
    };

    for _ in 0..options.count {
        let house = engine
            .play_observed(rng, &mut observer)?
            .into_house(settings.policy)?;
        let composition = house.composition()?;
        writeln!(out, "{composition}")?;

        if options.hexagram {
            let (real, imag) = house.hexagrams()?;
            writeln!(
                out,
                "{} > {}",
                real.with_numbering(settings.numbering),
                imag.with_numbering(settings.numbering)
            )?;
        }

        if let Some(file) = log.as_mut() {
            writeln!(file, "{composition}")?;
        }
    }
    Ok(())
}

/// Reformat every line of `input`. Lines that do not parse are written to
/// `rejected` unchanged. Returns how many were rejected.
pub fn fmt<I, W, E>(
    policy: HousePolicy,
    annotations: Annotations,
    input: I,
    out: &mut W,
    rejected: &mut E,
) -> Result<usize>
where
    I: BufRead,
    W: Write,
    E: Write,
{
    let mut count = 0;
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        match reformat(&line, policy, annotations) {
            Ok(formatted) => writeln!(out, "{formatted}")?,
            Err(err) => {
                tracing::warn!(error = %err, "Line left unchanged");
                writeln!(rejected, "{}", line.trim_end())?;
                count += 1;
            }
        }
    }
    Ok(count)
}

pub fn name<W: Write>(raw: &str, numbering: HexagramOrder, out: &mut W) -> Result<()> {
    let hexagram = Hexagram::parse(raw)?.with_numbering(numbering);
    writeln!(out, "{hexagram}")?;
    Ok(())
}
