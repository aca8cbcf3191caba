//! Merge command implementation

use anyhow::{Context, Result};
use bdfkit::prelude::merge_fonts;

use super::{read_font, write_font};
use crate::cli::MergeArgs;

pub fn run(args: &MergeArgs) -> Result<()> {
    let base = read_font(&args.base)?;
    let custom = read_font(&args.custom)?;

    let merged = merge_fonts(&base, &custom).context("Failed to merge fonts")?;
    log::info!(
        "Merged font has {} glyphs ({} from {})",
        merged.glyph_count(),
        merged.glyph_count().saturating_sub(custom.glyph_count()),
        args.base.display()
    );

    write_font(&merged, args.output.output.as_deref())
}
