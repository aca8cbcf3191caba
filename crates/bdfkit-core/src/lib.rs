// this_file: crates/bdfkit-core/src/lib.rs

//! bdfkit core: glyphs, fonts and the pixels between them
//!
//! Everything else in bdfkit builds on three things defined here:
//!
//! - [`Glyph`] - one character's bitmap plus its metrics, and the
//!   [`Glyph::merge`] primitive that composites one bitmap onto another
//! - [`Font`] - an ordered glyph collection indexed by codepoint, with the
//!   BDF-level properties and comments that travel with it
//! - [`GlyphStore`] - the narrow view of a font that glyph synthesis needs
//!
//! ## Coordinates
//!
//! Pixel coordinates grow right and up. A glyph's bounding box is anchored
//! at `(x, y)` relative to the glyph origin, and row `i` of its bitmap covers
//! `y + i`, so rows are kept bottom to top. Hex rows, the way bitmap fonts
//! spell them on disk, run top to bottom with the leftmost pixel in the most
//! significant bit.
//!
//! ```rust
//! use bdfkit_core::{BoundingBox, Glyph};
//!
//! let mut glyph = Glyph::from_hex_rows("slash", None, BoundingBox::new(0, 0, 2, 2), 3, &["4", "8"])?;
//! let copy = glyph.clone();
//! glyph.merge(&copy, 2, 2);
//!
//! assert_eq!(glyph.hex_rows(), vec!["1", "2", "4", "8"]);
//! assert_eq!(glyph.bounding_box(), BoundingBox::new(0, 0, 4, 4));
//! assert_eq!(glyph.advance(), 5);
//! # Ok::<(), bdfkit_core::BitmapError>(())
//! ```

pub mod effects;
pub mod error;
pub mod font;
pub mod glyph;

pub use error::{BitmapError, FontError, Result};
pub use font::{Font, GlyphStore, PropertyValue};
pub use glyph::{AdvanceRule, BitRow, BoundingBox, Glyph};

/// Shared scalar types
pub mod types {
    /// A character code as a font encodes it
    ///
    /// For Unicode-encoded fonts this is the Unicode scalar value. Fonts may
    /// carry codes that are not valid `char`s, so this stays a plain integer.
    pub type Codepoint = u32;

    /// Formats a codepoint the way Unicode charts do, e.g. `U+00E1`
    pub fn display_codepoint(codepoint: Codepoint) -> String {
        format!("U+{codepoint:04X}")
    }
}

pub use types::Codepoint;
