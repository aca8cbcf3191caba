// this_file: crates/bdfkit-compose/tests/synthesis.rs

use bdfkit_compose::{FailureCause, Resolution, SynthesisError, Synthesizer};
use bdfkit_core::{BoundingBox, Codepoint, Font, FontError, Glyph, GlyphStore};
use bdfkit_unicode::{CombiningClass, Component, DecompositionTable};
use proptest::prelude::*;

const BASE: Codepoint = 0x78;
const GRAVE: Codepoint = 0x300;
const HIGH_GRAVE: Codepoint = 0x301;
const CEDILLA: Codepoint = 0x327;

fn spacing(codepoint: Codepoint) -> Component {
    Component::new(codepoint, CombiningClass::SPACING)
}

fn mark(codepoint: Codepoint, class: u8) -> Component {
    Component::new(codepoint, CombiningClass(class))
}

fn hex(font: &Font, codepoint: Codepoint) -> Vec<String> {
    font.glyph(codepoint).unwrap().hex_rows()
}

/// 'a' and 'b' as two-pixel diagonals, advance 3
fn ab_font() -> Font {
    let mut font = Font::new("Test", 12, 100, 100);
    font.new_glyph("a", &["4", "8"], BoundingBox::new(0, 0, 2, 2), 3, Some(0x61))
        .unwrap();
    font.new_glyph("b", &["8", "4"], BoundingBox::new(0, 0, 2, 2), 3, Some(0x62))
        .unwrap();
    font
}

/// A 3x3 box base glyph plus accents drawn in three different ways
fn accent_font() -> Font {
    let mut font = Font::new("Accents", 12, 100, 100);
    font.new_glyph("x", &["E0", "A0", "E0"], BoundingBox::new(0, 0, 3, 3), 4, Some(BASE))
        .unwrap();
    // Drawn on the baseline, for fonts without a cap height
    font.new_glyph("grave", &["8"], BoundingBox::new(0, 0, 1, 1), 2, Some(GRAVE))
        .unwrap();
    // Drawn above a 5-pixel cap height
    font.new_glyph("acute", &["8"], BoundingBox::new(0, 6, 1, 1), 2, Some(HIGH_GRAVE))
        .unwrap();
    font.new_glyph("cedilla", &["8"], BoundingBox::new(0, -1, 1, 1), 2, Some(CEDILLA))
        .unwrap();
    font
}

#[test]
fn spacing_components_sit_side_by_side() {
    let table = DecompositionTable::from_entries([(0x63, vec![spacing(0x61), spacing(0x62)])]);
    let mut font = ab_font();

    let resolution = Synthesizer::new(&table).resolve(&mut font, 0x63).unwrap();

    assert_eq!(resolution, Resolution::Built);
    let c = font.glyph(0x63).unwrap();
    assert_eq!(c.advance(), 6);
    assert_eq!(c.bounding_box(), BoundingBox::new(0, 0, 5, 2));
    assert_eq!(c.hex_rows(), vec!["50", "88"]);
    assert_eq!(c.to_string(), "|#.#.\n#---#");
}

#[test]
fn failed_synthesis_leaves_the_store_alone() {
    let table = DecompositionTable::from_entries([(0x64, vec![spacing(0x61), spacing(0x7A)])]);
    let mut font = ab_font();
    let before = font.clone();

    let err = Synthesizer::new(&table).resolve(&mut font, 0x64).unwrap_err();

    assert_eq!(
        err,
        SynthesisError::ComponentUnavailable {
            codepoint: 0x64,
            component: 0x7A,
            source: Box::new(SynthesisError::DecompositionMissing(0x7A)),
        }
    );
    assert_eq!(font, before);
}

#[test]
fn code_points_without_a_decomposition_fail() {
    let table = DecompositionTable::default();
    let err = Synthesizer::new(&table)
        .resolve(&mut ab_font(), 0x63)
        .unwrap_err();
    assert_eq!(err, SynthesisError::DecompositionMissing(0x63));
}

#[test]
fn unsupported_classes_are_rejected() {
    let table = DecompositionTable::from_entries([(0x1A1, vec![spacing(0x61), mark(0x62, 216)])]);
    let mut font = ab_font();

    let err = Synthesizer::new(&table).resolve(&mut font, 0x1A1).unwrap_err();
    assert_eq!(err.cause(), Some(FailureCause::UnsupportedClass(CombiningClass(216))));
    assert!(!font.contains(0x1A1));
}

#[test]
fn mutual_decompositions_terminate() {
    let table = DecompositionTable::from_entries([
        (0x100, vec![spacing(0x101)]),
        (0x101, vec![spacing(0x100)]),
    ]);
    let mut font = ab_font();

    let err = Synthesizer::new(&table).resolve(&mut font, 0x100).unwrap_err();
    assert_eq!(err.cause(), Some(FailureCause::Cycle(0x100)));
    assert!(!font.contains(0x100));
    assert!(!font.contains(0x101));
}

#[test]
fn above_marks_sit_on_the_ink_without_a_cap_height() {
    let table = DecompositionTable::from_entries([(0xE0, vec![spacing(BASE), mark(GRAVE, 230)])]);
    let mut font = accent_font();

    Synthesizer::new(&table).resolve(&mut font, 0xE0).unwrap();

    let glyph = font.glyph(0xE0).unwrap();
    assert_eq!(glyph.advance(), 4);
    assert_eq!(glyph.bounding_box(), BoundingBox::new(0, 0, 3, 4));
    assert_eq!(hex(&font, 0xE0), vec!["4", "E", "A", "E"]);
}

#[test]
fn above_marks_drop_by_the_cap_height_gap() {
    let table =
        DecompositionTable::from_entries([(0xE1, vec![spacing(BASE), mark(HIGH_GRAVE, 214)])]);
    let mut font = accent_font();
    font.set_property("CAP_HEIGHT", 5i64);

    Synthesizer::new(&table).resolve(&mut font, 0xE1).unwrap();

    assert_eq!(
        font.glyph(0xE1).unwrap().bounding_box(),
        BoundingBox::new(0, 0, 3, 5)
    );
    assert_eq!(hex(&font, 0xE1), vec!["4", "0", "E", "A", "E"]);
}

#[test]
fn below_marks_hang_under_the_base() {
    let table = DecompositionTable::from_entries([(0xE7, vec![spacing(BASE), mark(CEDILLA, 202)])]);
    let mut font = accent_font();

    Synthesizer::new(&table).resolve(&mut font, 0xE7).unwrap();

    let glyph = font.glyph(0xE7).unwrap();
    assert_eq!(glyph.advance(), 4);
    assert_eq!(glyph.bounding_box(), BoundingBox::new(0, -1, 3, 4));
    assert_eq!(hex(&font, 0xE7), vec!["E", "A", "E", "4"]);
}

#[test]
fn components_are_built_on_demand() {
    // s with dot below, then with dot above as well
    let table = DecompositionTable::from_entries([
        (0x1E63, vec![spacing(BASE), mark(CEDILLA, 220)]),
        (0x1E69, vec![spacing(0x1E63), mark(GRAVE, 230)]),
    ]);
    let mut font = accent_font();

    let report = Synthesizer::new(&table)
        .fill_codepoints(&mut font, [0x1E69])
        .unwrap();

    assert_eq!(report.built, vec![0x1E63, 0x1E69]);
    assert_eq!(
        font.glyph(0x1E69).unwrap().bounding_box(),
        BoundingBox::new(0, -1, 3, 5)
    );
    assert_eq!(hex(&font, 0x1E69), vec!["4", "E", "A", "E", "4"]);
}

#[test]
fn fill_counts_every_outcome() {
    let table = DecompositionTable::from_entries([
        (0x61, vec![spacing(0x62)]),
        (0x63, vec![spacing(0x61), spacing(0x62)]),
        (0xC1, vec![spacing(0x41), mark(0x301, 230)]),
        (0xE0, vec![spacing(0x61), mark(0x301, 230)]),
        (0xE1, vec![spacing(0x61), mark(0x301, 230)]),
        (0x1A1, vec![spacing(0x61), mark(0x31B, 216)]),
    ]);
    let mut font = ab_font();

    let report = Synthesizer::new(&table).fill(&mut font).unwrap();

    assert_eq!(report.attempted, 6);
    assert_eq!(report.already_present, 1);
    assert_eq!(report.built, vec![0x63]);
    assert_eq!(
        report.failures.iter().map(|(cp, _)| *cp).collect::<Vec<_>>(),
        vec![0xC1, 0xE0, 0xE1, 0x1A1]
    );
    assert_eq!(
        report.tally(),
        vec![
            (FailureCause::MissingDecomposition(0x41), 1),
            (FailureCause::UnsupportedClass(CombiningClass(216)), 1),
            (FailureCause::MissingDecomposition(0x301), 2),
        ]
    );
}

/// A store that refuses every new glyph
struct ReadOnlyStore(Font);

impl GlyphStore for ReadOnlyStore {
    fn contains(&self, codepoint: Codepoint) -> bool {
        self.0.contains(codepoint)
    }

    fn glyph(&self, codepoint: Codepoint) -> Option<&Glyph> {
        self.0.glyph(codepoint)
    }

    fn register(&mut self, glyph: Glyph) -> bdfkit_core::Result<()> {
        Err(FontError::DuplicateCodepoint(glyph.codepoint().unwrap_or_default()))
    }
}

#[test]
fn store_errors_stop_the_fill() {
    let table = DecompositionTable::from_entries([
        (0x63, vec![spacing(0x61), spacing(0x62)]),
        (0x64, vec![spacing(0x7A)]),
    ]);
    let mut store = ReadOnlyStore(ab_font());

    let err = Synthesizer::new(&table).fill(&mut store).unwrap_err();
    assert_eq!(err, FontError::DuplicateCodepoint(0x63));

    // Not wrapped as an unavailable component either
    let table = DecompositionTable::from_entries([
        (0x63, vec![spacing(0x61), spacing(0x62)]),
        (0x64, vec![spacing(0x63)]),
    ]);
    let err = Synthesizer::new(&table)
        .resolve(&mut store, 0x64)
        .unwrap_err();
    assert_eq!(
        err,
        SynthesisError::Font(FontError::DuplicateCodepoint(0x63))
    );
}

/// Glyphs by code point, independent of insertion order
fn snapshot(font: &Font) -> Vec<Glyph> {
    let mut glyphs = font.glyphs().to_vec();
    glyphs.sort_by_key(Glyph::codepoint);
    glyphs
}

fn chain_table() -> DecompositionTable {
    DecompositionTable::from_entries([
        (0x1E63, vec![spacing(BASE), mark(CEDILLA, 220)]),
        (0x1E69, vec![spacing(0x1E63), mark(GRAVE, 230)]),
        (0xE0, vec![spacing(BASE), mark(GRAVE, 230)]),
        (0xE7, vec![spacing(BASE), mark(CEDILLA, 202)]),
        (0x1E09, vec![spacing(0xE7), mark(HIGH_GRAVE, 230)]),
        (0x1EA0, vec![spacing(0x41), mark(CEDILLA, 220)]),
        (0x1EA6, vec![spacing(0x1EA0), mark(GRAVE, 230)]),
        (0x01A0, vec![spacing(BASE), mark(0x31B, 216)]),
        (0x2002, vec![spacing(BASE), spacing(0xE0), spacing(0x1E69)]),
    ])
}

proptest! {
    #[test]
    fn prop_fill_result_is_order_independent(
        order in Just(chain_table().codepoints()).prop_shuffle()
    ) {
        let table = chain_table();
        let synthesizer = Synthesizer::new(&table);

        let mut ascending = accent_font();
        let expected = synthesizer.fill(&mut ascending).unwrap();

        let mut shuffled = accent_font();
        let report = synthesizer.fill_codepoints(&mut shuffled, order).unwrap();

        prop_assert_eq!(snapshot(&shuffled), snapshot(&ascending));

        let mut built = report.built.clone();
        built.sort_unstable();
        let mut expected_built = expected.built.clone();
        expected_built.sort_unstable();
        prop_assert_eq!(built, expected_built);

        let mut failed: Vec<_> = report.failures.iter().map(|(cp, _)| *cp).collect();
        failed.sort_unstable();
        prop_assert_eq!(failed, vec![0x01A0, 0x1EA0, 0x1EA6]);
    }
}
