// this_file: crates/bdfkit-unicode/src/table.rs

//! The decomposition table glyph synthesis reads
//!
//! Built once from a [`CharacterDatabase`] by scanning every code point,
//! then shared read-only. Only decompositions that mean "draw these glyphs
//! on or beside each other" survive the scan.

use std::collections::HashMap;

use bdfkit_core::Codepoint;

use crate::combining::CombiningClass;
use crate::database::{CharacterDatabase, DecompositionTag};

/// Highest Unicode code point
pub const MAX_CODEPOINT: Codepoint = 0x10FFFF;

/// Tagged decompositions that still describe a visual overlay
///
/// Everything else (superscripts, font variants, positional forms, ...)
/// needs a differently drawn glyph, not a composite.
pub const OVERLAY_TAGS: [DecompositionTag; 2] =
    [DecompositionTag::Compat, DecompositionTag::NoBreak];

/// Soft-dotted bases and the dotless letters that replace them under an
/// "above" mark
pub static SOFT_DOTTED: [(Codepoint, Codepoint); 2] = [
    (0x0069, 0x0131), // i -> dotless i
    (0x006A, 0x0237), // j -> dotless j
];

/// One component of a decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    pub codepoint: Codepoint,
    pub class: CombiningClass,
}

impl Component {
    pub const fn new(codepoint: Codepoint, class: CombiningClass) -> Self {
        Self { codepoint, class }
    }
}

/// Read-only map from a code point to the components that draw it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecompositionTable {
    entries: HashMap<Codepoint, Vec<Component>>,
}

impl DecompositionTable {
    /// Scans the whole code point space of `db`
    pub fn build<D: CharacterDatabase + ?Sized>(db: &D) -> Self {
        let entries: HashMap<_, _> = (0..=MAX_CODEPOINT)
            .filter_map(|codepoint| {
                decompose(db, codepoint).map(|components| (codepoint, components))
            })
            .collect();

        log::info!("Built decomposition table with {} entries", entries.len());
        Self { entries }
    }

    /// A table with exactly the given entries, no filtering applied
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Codepoint, Vec<Component>)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, codepoint: Codepoint) -> Option<&[Component]> {
        self.entries.get(&codepoint).map(Vec::as_slice)
    }

    pub fn contains(&self, codepoint: Codepoint) -> bool {
        self.entries.contains_key(&codepoint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every decomposable code point, ascending
    pub fn codepoints(&self) -> Vec<Codepoint> {
        let mut codepoints: Vec<_> = self.entries.keys().copied().collect();
        codepoints.sort_unstable();
        codepoints
    }

    /// Entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Codepoint, &[Component])> {
        self.entries
            .iter()
            .map(|(codepoint, components)| (*codepoint, components.as_slice()))
    }
}

/// Builds the full decomposition table from `db`
pub fn build_decomposition_table<D: CharacterDatabase + ?Sized>(db: &D) -> DecompositionTable {
    DecompositionTable::build(db)
}

/// The table entry for a single code point, if it gets one
pub fn decompose<D: CharacterDatabase + ?Sized>(
    db: &D,
    codepoint: Codepoint,
) -> Option<Vec<Component>> {
    let decomposition = db.decomposition(codepoint)?;
    if let Some(tag) = decomposition.tag {
        if !OVERLAY_TAGS.contains(&tag) {
            return None;
        }
    }

    let mut components: Vec<Component> = decomposition
        .codepoints
        .iter()
        .map(|&component| Component::new(component, db.combining_class(component)))
        .collect();

    let (base, marks) = components.split_first_mut()?;
    if marks.iter().any(|mark| mark.class.is_above()) {
        let dotless = SOFT_DOTTED
            .iter()
            .find(|(dotted, _)| *dotted == base.codepoint)
            .map(|&(_, dotless)| dotless);
        if let Some(dotless) = dotless {
            base.codepoint = dotless;
            base.class = db.combining_class(dotless);
        }
    }

    Some(components)
}
