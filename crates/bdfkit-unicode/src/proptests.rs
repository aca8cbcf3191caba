use super::*;
use proptest::prelude::*;

/// UnicodeData lines for U+F000 = `base` + U+E000, with U+E000 in `class`
fn pair_data(base: u32, class: u8) -> UnicodeData {
    let text = format!(
        "E000;MARK;Mn;{class};NSM;;;;;N;;;;;\nF000;PAIR;Ll;0;L;{base:04X} E000;;;;N;;;;;\n"
    );
    UnicodeData::parse(&text).unwrap()
}

// Property: a soft-dotted base loses its dot exactly under an "above" mark
proptest! {
    #[test]
    fn prop_soft_dotted_swap_follows_mark_class(
        class in any::<u8>(),
        base in prop::sample::select(vec![0x61u32, 0x69, 0x6A]),
    ) {
        let db = pair_data(base, class);
        let components = decompose(&db, 0xF000).unwrap();

        let expected_base = match base {
            0x69 if CombiningClass(class).is_above() => 0x131,
            0x6A if CombiningClass(class).is_above() => 0x237,
            other => other,
        };
        prop_assert_eq!(components.len(), 2);
        prop_assert_eq!(components[0].codepoint, expected_base);
        prop_assert_eq!(components[1], Component::new(0xE000, CombiningClass(class)));
    }
}

// Property: canonical decompositions keep their component order
proptest! {
    #[test]
    fn prop_components_keep_their_order(
        codepoints in prop::collection::vec(0x100u32..0xD000, 1..6),
    ) {
        let fields: Vec<String> = codepoints.iter().map(|cp| format!("{cp:04X}")).collect();
        let text = format!("F000;SEQ;So;0;ON;{};;;;N;;;;;\n", fields.join(" "));
        let db = UnicodeData::parse(&text).unwrap();

        let components = decompose(&db, 0xF000).unwrap();
        let decoded: Vec<u32> = components.iter().map(|c| c.codepoint).collect();
        prop_assert_eq!(decoded, codepoints);
    }
}
