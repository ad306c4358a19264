//! Hexagram and trigram orderings

use proptest::prelude::*;
use yarrow_engine::Hexagram;
use yarrow_types::{HexagramIndex, HexagramOrder, TrigramIndex, TrigramOrder};

fn any_order() -> impl Strategy<Value = HexagramOrder> {
    prop::sample::select(HexagramOrder::ALL.to_vec())
}

#[test]
fn well_known_king_wen_numbers() {
    // (binary index, King Wen number)
    for (index, wen) in [(63, 1), (0, 2), (1, 24), (62, 44), (32, 23), (21, 63), (42, 64)] {
        let hexagram = Hexagram::new(HexagramIndex::new(index).unwrap());
        assert_eq!(hexagram.wen(), wen, "index {index}");
    }
}

#[test]
fn trigram_orders_start_where_expected() {
    let zero = TrigramIndex::new(0).unwrap();
    let seven = TrigramIndex::new(7).unwrap();
    assert_eq!(TrigramOrder::Yi.glyph(zero), '☷');
    assert_eq!(TrigramOrder::Yi.glyph(seven), '☰');
    assert_eq!(TrigramOrder::Fuxi.position(seven), 1);
    assert_eq!(TrigramOrder::KingWen.position(zero), 2);
}

proptest! {
    #[test]
    fn glyph_to_index_inverts_index_to_glyph(order in any_order(), value in 0u64..64) {
        let index = HexagramIndex::new(value).unwrap();
        prop_assert_eq!(order.index_of(order.glyph(index)), Some(index));
    }

    #[test]
    fn positions_are_one_based(order in any_order(), value in 0u64..64) {
        let position = order.position(HexagramIndex::new(value).unwrap());
        prop_assert!((1..=64).contains(&position));
    }

    #[test]
    fn names_parse_back(value in 0u64..64) {
        let hexagram = Hexagram::new(HexagramIndex::new(value).unwrap());
        let rendered = hexagram.to_string();
        let glyph = rendered.chars().next().unwrap().to_string();
        prop_assert_eq!(Hexagram::parse(&glyph).unwrap(), hexagram);
        prop_assert_eq!(Hexagram::parse(&format!("w{}", hexagram.wen())).unwrap(), hexagram);
        prop_assert_eq!(Hexagram::parse(&format!("y{value:o}")).unwrap(), hexagram);
    }

    #[test]
    fn out_of_range_indexes_are_rejected(value in 64u64..) {
        prop_assert!(HexagramIndex::new(value).is_err());
    }
}
