//! yarrow CLI - binary entry point.
//!
//! Thin command surface over [`yarrow_engine`]:
//!
//! ```text
//! play  -> DrawEngine::play_observed -> House::composition -> stdout (+ --append file)
//! fmt   -> stdin lines -> TranscriptLine::parse -> render(Annotations) -> stdout
//! name  -> Hexagram::parse -> stdout
//! ```
//!
//! Settings come from `~/.yarrow/config.toml`; logs go to
//! `~/.yarrow/logs/yarrow.log` so stdout stays clean.

mod commands;
mod logging;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use yarrow_config::Settings;
use yarrow_engine::{Annotations, HexagramOrder};

use crate::commands::PlayOptions;

#[derive(Debug, Parser)]
#[command(name = "yarrow", version, about = "Cast and read yarrow houses")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Cast houses and print their compositions
    Play(PlayArgs),
    /// Reformat transcript lines from stdin
    Fmt(FmtArgs),
    /// Name a hexagram given as glyph, index, y-octal or w-position
    Name {
        hexagram: String,
        /// Ordering used for the position number
        #[arg(long)]
        order: Option<HexagramOrder>,
    },
}

#[derive(Debug, Args)]
struct PlayArgs {
    /// Fixed seed (overrides config and YARROW_SEED)
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Also print the hexagrams named by each house
    #[arg(long)]
    hexagram: bool,
    /// Append compositions to FILE
    #[arg(long, value_name = "FILE")]
    append: Option<PathBuf>,
}

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)] // one flag per annotation column
struct FmtArgs {
    /// King Wen numbers of the two hexagrams
    #[arg(short = 'w')]
    wen: bool,
    /// Hexagram glyphs
    #[arg(short = 'x')]
    glyph: bool,
    /// Octal indices
    #[arg(short = 'y')]
    yi: bool,
    /// Drop the text after the composition
    #[arg(short = 'z')]
    drop_tail: bool,
}

impl From<&FmtArgs> for Annotations {
    fn from(args: &FmtArgs) -> Self {
        Annotations {
            wen: args.wen,
            glyph: args.glyph,
            yi: args.yi,
            keep_tail: !args.drop_tail,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = Settings::load();
    let configured = settings.as_ref().ok();
    logging::init_tracing(
        configured.and_then(|s| s.log_level.as_deref()),
        configured.and_then(|s| s.log_file.as_deref()),
    );
    let settings = settings?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let code = match cli.command {
        Command::Play(args) => {
            let settings = settings.with_seed(args.seed);
            let mut rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let options = PlayOptions {
                count: args.count,
                hexagram: args.hexagram,
                append: args.append,
            };
            commands::play(&settings, &options, &mut rng, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::Fmt(args) => {
            let rejected = commands::fmt(
                settings.policy,
                Annotations::from(&args),
                io::stdin().lock(),
                &mut out,
                &mut io::stderr(),
            )?;
            if rejected == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Name { hexagram, order } => {
            commands::name(&hexagram, order.unwrap_or(settings.numbering), &mut out)?;
            ExitCode::SUCCESS
        }
    };

    out.flush()?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fmt_flags_map_to_annotations() {
        let cli = Cli::try_parse_from(["yarrow", "fmt", "-w", "-y", "-z"]).unwrap();
        let Command::Fmt(args) = cli.command else {
            panic!("expected fmt");
        };
        let annotations = Annotations::from(&args);
        assert!(annotations.wen && annotations.yi);
        assert!(!annotations.glyph);
        assert!(!annotations.keep_tail);
    }

    #[test]
    fn name_order_parses_through_from_str() {
        let cli = Cli::try_parse_from(["yarrow", "name", "w1", "--order", "fuxi"]).unwrap();
        let Command::Name { order, .. } = cli.command else {
            panic!("expected name");
        };
        assert_eq!(order, Some(HexagramOrder::Fuxi));
    }

    #[test]
    fn play_defaults_to_one_house() {
        let cli = Cli::try_parse_from(["yarrow", "play", "--seed", "3"]).unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.count, 1);
        assert_eq!(args.seed, Some(3));
        assert!(args.append.is_none());
    }
}
