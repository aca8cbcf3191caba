// this_file: crates/bdfkit-unicode/src/lib.rs

//! Unicode facts for composing bitmap glyphs
//!
//! Glyph synthesis needs to know, for each character, which other
//! characters draw it and where each of them goes. This crate turns a
//! character database into exactly that: a [`DecompositionTable`] mapping a
//! code point to its components and their [`CombiningClass`]es.
//!
//! ```rust
//! use bdfkit_unicode::{build_decomposition_table, CombiningClass, UnicodeData};
//!
//! let db = UnicodeData::parse(
//!     "0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041\n\
//!      00E1;LATIN SMALL LETTER A WITH ACUTE;Ll;0;L;0061 0301;;;;N;;;00C1;;00C1\n\
//!      0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;;;;;",
//! )?;
//! let table = build_decomposition_table(&db);
//!
//! let components = table.get(0xE1).unwrap_or_default();
//! assert_eq!(components[1].class, CombiningClass::ABOVE);
//! # Ok::<(), bdfkit_unicode::UnicodeDataError>(())
//! ```

pub mod combining;
pub mod database;
pub mod table;

pub use combining::{CombiningClass, ABOVE_CLASSES};
pub use database::{
    CharacterDatabase, Decomposition, DecompositionTag, UnicodeData, UnicodeDataError,
};
pub use table::{
    build_decomposition_table, decompose, Component, DecompositionTable, OVERLAY_TAGS,
    SOFT_DOTTED,
};

#[cfg(test)]
mod proptests;
