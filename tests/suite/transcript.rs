//! Reading compositions back from transcript text

use proptest::prelude::*;
use yarrow_engine::{
    Annotations, HousePolicy, READING_WIDTH, TranscriptError, TranscriptLine, reformat,
};

use crate::common::{cast_house, house};

fn annotated() -> Annotations {
    Annotations {
        wen: true,
        glyph: true,
        yi: true,
        keep_tail: true,
    }
}

#[test]
fn annotations_name_the_same_hexagrams_as_the_house() {
    let house = house(&["ⴱ", "●●ⴱ", "●ⵔ", "ⴲⴲ●", "ⴲ"]);
    let composition = house.composition().unwrap();
    let (real, imag) = house.hexagrams().unwrap();
    let line = format!("{composition:<width$}question", width = READING_WIDTH);
    let rendered = reformat(&line, HousePolicy::default(), annotated()).unwrap();
    assert!(rendered.contains(&format!(" w{}>{} ", real.wen(), imag.wen())));
    assert!(rendered.contains(&format!(" {}>{} ", real.glyph(), imag.glyph())));
    assert!(rendered.contains(&format!(
        " y{:02o}>{:02o} ",
        real.index().value(),
        imag.index().value()
    )));
    assert!(rendered.ends_with("question"));
}

#[test]
fn text_beyond_the_reading_is_not_parsed() {
    let line = format!("{:<width$}these words are not rooms", "ⵔ ● ● ● ⴲ", width = READING_WIDTH);
    let parsed = TranscriptLine::parse(&line, HousePolicy::default()).unwrap();
    assert_eq!(parsed.house().rooms().len(), 5);
    assert_eq!(parsed.tail(), "these words are not rooms");
}

#[test]
fn short_readings_fail_as_house_errors() {
    assert!(matches!(
        TranscriptLine::parse("ⵔ ● ●", HousePolicy::default())
            .unwrap()
            .render(Annotations::default()),
        Err(TranscriptError::House(_))
    ));
}

proptest! {
    #[test]
    fn cast_compositions_survive_reformatting(seed in any::<u64>()) {
        let composition = cast_house(seed).composition().unwrap();
        prop_assume!(composition.chars().count() <= READING_WIDTH);
        let again = reformat(&composition, HousePolicy::default(), Annotations::default()).unwrap();
        prop_assert_eq!(again, composition);
    }
}
