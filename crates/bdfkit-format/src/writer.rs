//! BDF output

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use bdfkit_core::{BoundingBox, Font, Glyph, PropertyValue};

use crate::error::Result;

/// Writes `font` as BDF 2.1
pub fn write_bdf<W: Write>(font: &Font, out: &mut W) -> Result<()> {
    let bbox = font.bounding_box();
    let (xdpi, ydpi) = font.resolution();
    let pixel_size = font.pixel_size();

    writeln!(out, "STARTFONT 2.1")?;
    for comment in font.comments() {
        writeln!(out, "COMMENT {comment}")?;
    }
    writeln!(out, "FONT {}", font.name())?;
    writeln!(out, "SIZE {} {xdpi} {ydpi}", point_size(font.decipoints()))?;
    writeln!(
        out,
        "FONTBOUNDINGBOX {} {} {} {}",
        bbox.width, bbox.height, bbox.x, bbox.y
    )?;

    let properties = properties(font, bbox, pixel_size);
    writeln!(out, "STARTPROPERTIES {}", properties.len())?;
    for (key, value) in &properties {
        writeln!(out, "{key} {}", quote(value))?;
    }
    writeln!(out, "ENDPROPERTIES")?;

    writeln!(out, "CHARS {}", font.glyph_count())?;
    for glyph in font.glyphs() {
        write_glyph(out, glyph, pixel_size)?;
    }
    writeln!(out, "ENDFONT")?;

    log::debug!("Wrote {} glyphs of {}", font.glyph_count(), font.name());
    Ok(())
}

/// Writes `font` to a BDF file, replacing it if it exists
pub fn write_bdf_file(font: &Font, path: impl AsRef<Path>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_bdf(font, &mut out)?;
    out.flush()?;
    Ok(())
}

/// `font` as BDF text
pub fn to_bdf_string(font: &Font) -> Result<String> {
    let mut out = Vec::new();
    write_bdf(font, &mut out)?;
    Ok(String::from_utf8(out).map_err(io::Error::other)?)
}

/// Whole points, or one decimal for fractional sizes
fn point_size(decipoints: u32) -> String {
    match decipoints % 10 {
        0 => (decipoints / 10).to_string(),
        tenths => format!("{}.{tenths}", decipoints / 10),
    }
}

/// The font's properties plus the ones derived from its size and glyphs,
/// sorted by name
fn properties(
    font: &Font,
    bbox: BoundingBox,
    pixel_size: i64,
) -> BTreeMap<&str, PropertyValue> {
    let (xdpi, ydpi) = font.resolution();
    let mut properties: BTreeMap<&str, PropertyValue> = font
        .properties()
        .map(|(key, value)| (key, value.clone()))
        .collect();

    // POINT_SIZE is in decipoints on disk
    properties.insert("POINT_SIZE", PropertyValue::from(font.decipoints()));
    properties.insert("PIXEL_SIZE", PropertyValue::Int(pixel_size));
    properties.insert("RESOLUTION_X", PropertyValue::from(xdpi));
    properties.insert("RESOLUTION_Y", PropertyValue::from(ydpi));
    properties.insert("FONT_ASCENT", PropertyValue::from(bbox.top().max(0)));
    properties.insert("FONT_DESCENT", PropertyValue::from((-bbox.y).max(0)));

    if !properties.contains_key("DEFAULT_CHAR") {
        if let Some(default_char) = font.codepoints().max() {
            properties.insert("DEFAULT_CHAR", PropertyValue::from(default_char));
        }
    }
    properties
}

fn quote(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Int(value) => value.to_string(),
        PropertyValue::Str(value) => format!("\"{}\"", value.replace('"', "\"\"")),
    }
}

fn write_glyph<W: Write>(out: &mut W, glyph: &Glyph, pixel_size: i64) -> io::Result<()> {
    let bbox = glyph.bounding_box();
    let swidth = if pixel_size == 0 {
        0
    } else {
        i64::from(glyph.advance()) * 1000 / pixel_size
    };

    writeln!(out, "STARTCHAR {}", glyph.name())?;
    writeln!(out, "ENCODING {}", glyph.codepoint().map_or(-1, i64::from))?;
    writeln!(out, "SWIDTH {swidth} 0")?;
    writeln!(out, "DWIDTH {} 0", glyph.advance())?;
    writeln!(out, "BBX {} {} {} {}", bbox.width, bbox.height, bbox.x, bbox.y)?;
    writeln!(out, "BITMAP")?;
    for row in glyph.hex_rows() {
        // Rows are padded to whole bytes
        if row.len() % 2 == 1 {
            writeln!(out, "{row}0")?;
        } else {
            writeln!(out, "{row}")?;
        }
    }
    writeln!(out, "ENDCHAR")
}
