//! Whole-font cosmetic effects
//!
//! Both effects return a new font and leave their inputs untouched.

use crate::error::Result;
use crate::font::Font;
use crate::glyph::AdvanceRule;

/// Thickens every glyph by smearing it one pixel to the right
///
/// With `maintain_spacing` each advance grows by the extra pixel so glyphs
/// don't run into each other; without it advances stay as they were.
pub fn embolden(font: &Font, maintain_spacing: bool) -> Font {
    let mut res = font.clone();
    let rule = if maintain_spacing {
        AdvanceRule::Union
    } else {
        AdvanceRule::Keep
    };

    for glyph in res.glyphs_mut() {
        let copy = glyph.clone();
        glyph.merge_with(&copy, 1, 0, rule);
    }

    log::debug!("Emboldened {} glyphs", res.glyph_count());
    res
}

/// Overlays `custom` on `base`
///
/// The result starts as a copy of `custom` and gains every encoded glyph of
/// `base` whose codepoint `custom` doesn't cover.
pub fn merge_fonts(base: &Font, custom: &Font) -> Result<Font> {
    let mut res = custom.clone();
    let mut borrowed = 0usize;

    for glyph in base.glyphs() {
        let Some(codepoint) = glyph.codepoint() else {
            continue;
        };
        if res.contains(codepoint) {
            continue;
        }
        res.add_glyph(glyph.clone())?;
        borrowed += 1;
    }

    log::debug!(
        "Merged {} glyphs from {} into {}",
        borrowed,
        base.name(),
        custom.name()
    );
    Ok(res)
}
