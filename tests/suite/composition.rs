//! House rendering and the major projection over real castings

use proptest::prelude::*;
use yarrow_engine::{HexagramOrder, HousePolicy, INTENT_COLUMN, READING_WIDTH};

use crate::common::{cast, cast_house, house};

#[test]
fn all_sixes_fourth_room_is_split_into_a_fifth() {
    let h = house(&["ⵔ", "●●●", "ⵔⵔⵔ", "ⴲⴲⴲⴲⴲⴲⴲⴲⴲ"]);
    assert_eq!(h.rooms().len(), 5);
    assert_eq!(h.rooms()[4].to_string(), "ⴲ");
    assert!(h.composition().is_ok());
}

#[test]
fn ledger_lists_every_room() {
    let h = cast(12).into_house(HousePolicy::ledger()).unwrap();
    let composition = h.composition().unwrap();
    let lines: Vec<&str> = composition.lines().collect();
    assert_eq!(lines.len(), h.rooms().len() + 1);
    assert_eq!(lines.last().copied(), Some(h.product().to_string().as_str()));
}

#[test]
fn hexagram_names_use_king_wen_numbers() {
    let h = house(&["ⵔ", "ⵔⵔⵔⵔ", "●●●●", "ⵔⵔ●●", "ⵔ"]);
    let (real, imag) = h.hexagrams().unwrap();
    assert_eq!(real, imag);
    // every half reduces to yang
    assert_eq!(real.index().value(), 63);
    assert_eq!(real.wen(), HexagramOrder::KingWen.position(real.index()));
}

proptest! {
    #[test]
    fn intent_sits_at_its_column_when_it_fits(seed in any::<u64>()) {
        let composition = cast_house(seed).composition().unwrap();
        let chars: Vec<char> = composition.chars().collect();
        if chars.len() <= INTENT_COLUMN + 1 {
            prop_assert_eq!(chars.len(), INTENT_COLUMN + 1);
            prop_assert!(chars[INTENT_COLUMN - 1] == ' ');
        }
        prop_assert!(chars.len() <= READING_WIDTH + 8);
        prop_assert_eq!(composition.split_whitespace().count(), 5);
    }

    #[test]
    fn major_indexes_stay_in_range(seed in any::<u64>()) {
        let h = cast_house(seed);
        let major = h.major().unwrap();
        prop_assert_eq!(major.len(), 6);
        prop_assert!(major.real() < 64);
        prop_assert!(major.imag() < 64);
        let (real, imag) = h.hexagrams().unwrap();
        prop_assert_eq!(u64::from(real.index().value()), major.real());
        prop_assert_eq!(u64::from(imag.index().value()), major.imag());
    }

    #[test]
    fn line_length_tracks_scored_rooms(seed in any::<u64>()) {
        let h = cast_house(seed);
        let scored: usize = h.rooms()[1..=3].iter().map(|r| r.len()).sum();
        prop_assert_eq!(h.line_length().unwrap(), 12 - (scored / 4) as i64);
    }
}
