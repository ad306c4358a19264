//! Shared test utilities and fixtures

#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use yarrow_engine::{Draw, DrawEngine, House, HousePolicy, Sequence};

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One default casting with a fixed seed.
pub fn cast(seed: u64) -> Draw {
    DrawEngine::default()
        .play(&mut seeded(seed))
        .expect("default pile always casts")
}

pub fn cast_house(seed: u64) -> House {
    cast(seed)
        .into_house(HousePolicy::default())
        .expect("a draw has five rooms")
}

pub fn seq(text: &str) -> Sequence {
    text.parse().expect("fixture sequence holds states")
}

pub fn house(rooms: &[&str]) -> House {
    House::new(rooms.iter().map(|r| seq(r)).collect(), HousePolicy::default())
        .expect("fixture house has rooms")
}
