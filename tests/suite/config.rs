//! Config files driving the engine

use std::fs;

use tempfile::TempDir;
use yarrow_config::{ConfigError, Settings, YarrowConfig};
use yarrow_engine::{CompositionStyle, DrawEngine, HexagramOrder};

use crate::common::seeded;

fn load(content: &str) -> Result<Settings, ConfigError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    YarrowConfig::load_from(&path)?
        .unwrap_or_default()
        .resolve()
}

#[test]
fn configured_seed_gives_repeatable_houses() {
    let settings = load("[ritual]\nseed = 11\n").unwrap();
    let seed = settings.seed.unwrap();
    let cast = || {
        DrawEngine::new(settings.pile)
            .play(&mut seeded(seed))
            .unwrap()
            .into_house(settings.policy)
            .unwrap()
            .composition()
            .unwrap()
    };
    assert_eq!(cast(), cast());
}

#[test]
fn ledger_config_renders_ledgers() {
    let settings = load("[display]\nstyle = \"ledger\"\norder = \"shao-yong\"\n").unwrap();
    assert_eq!(settings.policy.style(), CompositionStyle::Ledger);
    assert_eq!(settings.numbering, HexagramOrder::ShaoYong);
    let house = DrawEngine::new(settings.pile)
        .play(&mut seeded(1))
        .unwrap()
        .into_house(settings.policy)
        .unwrap();
    assert_eq!(house.composition().unwrap().lines().count(), 6);
}

#[test]
fn all_one_state_pile_is_allowed() {
    let settings = load("[ritual]\nyin = 50\nyang = 0\nold_yang = 0\nold_yin = 0\n").unwrap();
    let draw = DrawEngine::new(settings.pile).play(&mut seeded(2)).unwrap();
    assert!(draw.rooms().iter().all(|room| room.to_string().chars().all(|c| c == '●')));
}

#[test]
fn bad_pile_reports_the_count() {
    let err = load("[ritual]\nold_yin = 0\n").unwrap_err();
    assert_eq!(err.to_string(), "invalid ritual pile: seed pile has 47 elements, the ritual needs exactly 50");
}
