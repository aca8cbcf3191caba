//! bdfkit - composite glyphs for bitmap fonts
//!
//! Bitmap fonts often ship "a" and a combining acute accent but no "á".
//! bdfkit fills such gaps by drawing the pieces Unicode says a character is
//! made of on top of and beside each other:
//!
//! 1. Load character data ([`unicode::UnicodeData`])
//! 2. Build the decomposition table once ([`unicode::build_decomposition_table`])
//! 3. Fill a font from it ([`compose::Synthesizer`])
//!
//! Fonts are read and written as BDF with the `bdf` feature (on by
//! default), and [`font::effects`] adds emboldening and font merging.
//!
//! # Example
//!
//! ```ignore
//! use bdfkit::prelude::*;
//!
//! let mut font = bdfkit::bdf::read_bdf_file("font.bdf")?;
//! let db = UnicodeData::from_path("UnicodeData.txt")?;
//! let table = build_decomposition_table(&db);
//! let report = Synthesizer::new(&table).fill(&mut font)?;
//! bdfkit::bdf::write_bdf_file(&font, "filled.bdf")?;
//! ```
//!
//! # Feature Flags
//!
//! - `bdf`: BDF reader and writer

pub use bdfkit_compose as compose;
pub use bdfkit_core as font;
pub use bdfkit_unicode as unicode;

#[cfg(feature = "bdf")]
pub use bdfkit_format as bdf;

pub use bdfkit_core::{Codepoint, Font, Glyph};

/// Common imports for typical usage
pub mod prelude {
    pub use bdfkit_compose::{FailureCause, FillReport, Resolution, SynthesisError, Synthesizer};
    pub use bdfkit_core::{
        effects::{embolden, merge_fonts},
        AdvanceRule, BoundingBox, Codepoint, Font, FontError, Glyph, GlyphStore, PropertyValue,
    };
    pub use bdfkit_unicode::{
        build_decomposition_table, CharacterDatabase, CombiningClass, DecompositionTable,
        UnicodeData,
    };
}

/// Builds the decomposition table from `db` and fills `font` from it
///
/// Convenience for the common one-shot case; keep the table around and use
/// a [`compose::Synthesizer`] directly to fill several fonts.
pub fn fill_font<D>(
    font: &mut Font,
    db: &D,
) -> Result<compose::FillReport, font::FontError>
where
    D: unicode::CharacterDatabase + ?Sized,
{
    let table = unicode::build_decomposition_table(db);
    let report = compose::Synthesizer::new(&table).fill(font)?;
    log::debug!("{} now has {} glyphs", font.name(), font.glyph_count());
    Ok(report)
}
