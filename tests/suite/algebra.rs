//! State algebra, bits and sequences

use proptest::prelude::*;
use yarrow_types::{Bit, PLANE_WIDTH, Sequence, State, Unit};

fn any_bit() -> impl Strategy<Value = Bit> {
    prop::sample::select(State::all().to_vec()).prop_map(Bit::new)
}

fn any_sequence(max: usize) -> impl Strategy<Value = Sequence> {
    prop::collection::vec(any_bit(), 1..=max).prop_map(|bits| Sequence::new(bits).unwrap())
}

#[test]
fn four_yins_make_yang() {
    assert_eq!(Bit::YIN * Bit::YIN * Bit::YIN * Bit::YIN, Bit::YANG);
    assert_eq!("●●●●".parse::<Sequence>().unwrap().product(), Bit::YANG);
}

#[test]
fn identity_is_the_unit_value() {
    let identity = Bit::try_from(Unit::new(1, 0)).unwrap();
    for state in State::all() {
        assert_eq!(Bit::new(*state) * identity, Bit::new(*state));
    }
}

#[test]
fn invalid_members_are_dropped_but_empty_fails() {
    let seq = Sequence::collect(["yin", "nonsense", "9", "7"]).unwrap();
    assert_eq!(seq.len(), 3);
    assert!(Sequence::collect(["nonsense"]).is_err());
    assert!("".parse::<Sequence>().is_err());
}

proptest! {
    #[test]
    fn multiplication_is_closed_and_commutative(a in any_bit(), b in any_bit()) {
        let product = a * b;
        prop_assert!(State::all().contains(&product.state()));
        prop_assert_eq!(product, b * a);
        prop_assert_eq!(a.checked_mul(b).unwrap(), product);
    }

    #[test]
    fn product_ignores_order(seq in any_sequence(40)) {
        let mut reversed = seq.bits().to_vec();
        reversed.reverse();
        prop_assert_eq!(Sequence::new(reversed).unwrap().product(), seq.product());
    }

    #[test]
    fn planes_round_trip(real in any::<u64>(), imag in any::<u64>()) {
        let seq = Sequence::from_planes(real, imag, Some(PLANE_WIDTH)).unwrap();
        prop_assert_eq!(seq.real(), real);
        prop_assert_eq!(seq.imag(), imag);
    }

    #[test]
    fn decoding_then_encoding_is_identity(seq in any_sequence(PLANE_WIDTH)) {
        let again = Sequence::from_planes(seq.real(), seq.imag(), Some(seq.len())).unwrap();
        prop_assert_eq!(again, seq);
    }

    #[test]
    fn slice_length_law(seq in any_sequence(30), a in 0usize..40, b in 0usize..40) {
        let expected = b.min(seq.len()).saturating_sub(a);
        match seq.slice(a..b) {
            Ok(slice) => prop_assert_eq!(slice.len(), expected),
            Err(_) => prop_assert_eq!(expected, 0),
        }
    }

    #[test]
    fn concatenation_multiplies_products(a in any_sequence(20), b in any_sequence(20)) {
        let joined = &a + &b;
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(joined.product(), a.product() * b.product());
    }
}
