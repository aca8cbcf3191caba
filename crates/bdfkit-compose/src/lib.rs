// this_file: crates/bdfkit-compose/src/lib.rs

//! Composite glyph synthesis
//!
//! Given a font and a [`DecompositionTable`](bdfkit_unicode::DecompositionTable),
//! the [`Synthesizer`] builds every glyph it can out of glyphs the font
//! already has: "á" from "a" and a combining acute, "ǖ" from "ü" (itself
//! built first if needed) and a combining macron, and so on.
//!
//! ```rust
//! use bdfkit_compose::Synthesizer;
//! use bdfkit_core::{BoundingBox, Font};
//! use bdfkit_unicode::{CombiningClass, Component, DecompositionTable};
//!
//! let mut font = Font::new("Demo", 12, 100, 100);
//! font.new_glyph("a", &["4", "8"], BoundingBox::new(0, 0, 2, 2), 3, Some(0x61))?;
//! font.new_glyph("b", &["8", "4"], BoundingBox::new(0, 0, 2, 2), 3, Some(0x62))?;
//!
//! let table = DecompositionTable::from_entries([(
//!     0x63,
//!     vec![
//!         Component::new(0x61, CombiningClass::SPACING),
//!         Component::new(0x62, CombiningClass::SPACING),
//!     ],
//! )]);
//! let report = Synthesizer::new(&table).fill(&mut font)?;
//!
//! assert_eq!(report.built, vec![0x63]);
//! assert_eq!(font.glyph(0x63).map(|g| g.advance()), Some(6));
//! # Ok::<(), bdfkit_core::FontError>(())
//! ```

pub mod error;
pub mod placement;
pub mod report;
pub mod synth;

pub use error::{FailureCause, SynthesisError};
pub use placement::Placement;
pub use report::FillReport;
pub use synth::{Resolution, Synthesizer};
