// this_file: crates/bdfkit-format/src/lib.rs

//! Reading and writing BDF fonts
//!
//! BDF is the X11 text format for bitmap fonts. [`read_bdf`] turns one into
//! a [`Font`](bdfkit_core::Font) and [`write_bdf`] turns it back, deriving
//! the size and metric properties from the font itself so they can't drift
//! from the glyphs.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{BdfError, Result};
pub use reader::{read_bdf, read_bdf_file, read_bdf_str};
pub use writer::{to_bdf_string, write_bdf, write_bdf_file};
