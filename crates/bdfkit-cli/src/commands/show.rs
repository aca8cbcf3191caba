//! Show command implementation

use anyhow::{bail, Result};
use bdfkit::font::types::display_codepoint;

use super::read_font;
use crate::cli::ShowArgs;

pub fn run(args: &ShowArgs) -> Result<()> {
    let font = read_font(&args.font)?;
    let Some(glyph) = font.glyph(args.codepoint) else {
        bail!(
            "{} has no glyph for {}",
            args.font.display(),
            display_codepoint(args.codepoint)
        );
    };

    let bbox = glyph.bounding_box();
    println!("{} {}", display_codepoint(args.codepoint), glyph.name());
    println!(
        "advance {}, box {}x{} at ({}, {})",
        glyph.advance(),
        bbox.width,
        bbox.height,
        bbox.x,
        bbox.y
    );
    println!("{glyph}");
    Ok(())
}
