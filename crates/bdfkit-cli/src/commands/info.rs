//! Info command implementation
//!
//! Displays a font's header, metrics and properties.

use anyhow::Result;

use super::read_font;
use crate::cli::InfoArgs;

pub fn run(args: &InfoArgs) -> Result<()> {
    let font = read_font(&args.font)?;
    let (xdpi, ydpi) = font.resolution();
    let bbox = font.bounding_box();

    println!("Font:        {}", font.name());
    let tenths = font.decipoints() % 10;
    let size = if tenths == 0 {
        font.point_size().to_string()
    } else {
        format!("{}.{tenths}", font.point_size())
    };
    println!("Size:        {size}pt at {xdpi}x{ydpi} dpi ({}px)", font.pixel_size());
    println!(
        "Glyphs:      {} ({} encoded)",
        font.glyph_count(),
        font.codepoints().count()
    );
    println!(
        "Bounding box: {}x{} at ({}, {})",
        bbox.width, bbox.height, bbox.x, bbox.y
    );
    match font.cap_height() {
        Some(cap_height) => println!("Cap height:  {cap_height}"),
        None => println!("Cap height:  (none)"),
    }

    for comment in font.comments() {
        println!("Comment:     {comment}");
    }

    println!();
    println!("Properties:");
    for (key, value) in font.properties() {
        println!("  {key:<20} {value}");
    }

    Ok(())
}
