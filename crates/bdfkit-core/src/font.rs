// this_file: crates/bdfkit-core/src/font.rs

//! Fonts: ordered glyphs, a codepoint index and BDF-level metadata

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

use crate::error::{FontError, Result};
use crate::glyph::{BoundingBox, Glyph};
use crate::types::Codepoint;

/// Property holding the cap height used to align "above" accents
pub const CAP_HEIGHT: &str = "CAP_HEIGHT";

/// What glyph synthesis needs from a font
///
/// Presence doubles as memoization: a codepoint that is in the store counts
/// as resolved and is never rebuilt. Stores only ever grow.
pub trait GlyphStore {
    fn contains(&self, codepoint: Codepoint) -> bool;

    fn glyph(&self, codepoint: Codepoint) -> Option<&Glyph>;

    /// Adds a glyph under its own codepoint
    ///
    /// Fails with [`FontError::DuplicateCodepoint`] if the codepoint is taken.
    fn register(&mut self, glyph: Glyph) -> Result<()>;

    /// Reference height for placing accents above a base, if the font has one
    fn cap_height(&self) -> Option<i32> {
        None
    }
}

/// A font property value: BDF only knows integers and strings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    Int(i64),
    Str(String),
}

impl PropertyValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(value) => Some(*value),
            PropertyValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Int(_) => None,
            PropertyValue::Str(value) => Some(value),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Str(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(value) => write!(f, "{value}"),
            PropertyValue::Str(value) => write!(f, "{value:?}"),
        }
    }
}

/// A bitmap font
///
/// Glyphs keep the order they were added in. Glyphs with a codepoint are
/// also indexed by it; unencoded glyphs are carried along but cannot be
/// looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    name: String,
    decipoints: u32,
    resolution: (u32, u32),
    comments: Vec<String>,
    properties: IndexMap<String, PropertyValue>,
    glyphs: Vec<Glyph>,
    by_codepoint: HashMap<Codepoint, usize>,
}

impl Font {
    /// Creates an empty font and seeds the standard size properties
    pub fn new(name: impl Into<String>, point_size: u32, xdpi: u32, ydpi: u32) -> Self {
        Self::with_decipoints(name, point_size.saturating_mul(10), xdpi, ydpi)
    }

    /// Like [`Font::new`], with the size in tenths of a point
    ///
    /// BDF headers may give fractional sizes such as `12.2`.
    pub fn with_decipoints(
        name: impl Into<String>,
        decipoints: u32,
        xdpi: u32,
        ydpi: u32,
    ) -> Self {
        let name = name.into();

        let mut properties = IndexMap::new();
        properties.insert("FACE_NAME".to_string(), PropertyValue::Str(name.clone()));
        properties.insert(
            "POINT_SIZE".to_string(),
            PropertyValue::from(decipoints / 10),
        );
        properties.insert("RESOLUTION_X".to_string(), PropertyValue::from(xdpi));
        properties.insert("RESOLUTION_Y".to_string(), PropertyValue::from(ydpi));

        Self {
            name,
            decipoints,
            resolution: (xdpi, ydpi),
            comments: Vec::new(),
            properties,
            glyphs: Vec::new(),
            by_codepoint: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in whole points, any fraction dropped
    pub fn point_size(&self) -> u32 {
        self.decipoints / 10
    }

    /// Size in tenths of a point
    pub fn decipoints(&self) -> u32 {
        self.decipoints
    }

    /// Em height in pixels at the vertical resolution
    pub fn pixel_size(&self) -> i64 {
        let (_, ydpi) = self.resolution;
        (f64::from(self.decipoints) * f64::from(ydpi) / 720.0).round() as i64
    }

    /// Horizontal and vertical resolution in dots per inch
    pub fn resolution(&self) -> (u32, u32) {
        self.resolution
    }

    /// Adds a comment; multi-line text becomes one comment per line
    pub fn add_comment(&mut self, comment: &str) {
        self.comments.extend(comment.lines().map(str::to_string));
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Properties in insertion order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn contains(&self, codepoint: Codepoint) -> bool {
        self.by_codepoint.contains_key(&codepoint)
    }

    pub fn glyph(&self, codepoint: Codepoint) -> Option<&Glyph> {
        self.by_codepoint
            .get(&codepoint)
            .and_then(|index| self.glyphs.get(*index))
    }

    /// All glyphs, in the order they were added
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub(crate) fn glyphs_mut(&mut self) -> &mut [Glyph] {
        &mut self.glyphs
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Codepoints of the encoded glyphs, in glyph order
    pub fn codepoints(&self) -> impl Iterator<Item = Codepoint> + '_ {
        self.glyphs.iter().filter_map(Glyph::codepoint)
    }

    /// Adds a glyph, indexing it by codepoint when it has one
    pub fn add_glyph(&mut self, glyph: Glyph) -> Result<&Glyph> {
        if let Some(codepoint) = glyph.codepoint() {
            if self.by_codepoint.contains_key(&codepoint) {
                return Err(FontError::DuplicateCodepoint(codepoint));
            }
            self.by_codepoint.insert(codepoint, self.glyphs.len());
        }

        let index = self.glyphs.len();
        self.glyphs.push(glyph);
        Ok(&self.glyphs[index])
    }

    /// Builds a glyph from hex rows (top row first) and adds it
    pub fn new_glyph<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        hex_rows: &[S],
        bbox: BoundingBox,
        advance: i32,
        codepoint: Option<Codepoint>,
    ) -> Result<&Glyph> {
        let glyph = Glyph::from_hex_rows(name, codepoint, bbox, advance, hex_rows)?;
        self.add_glyph(glyph)
    }

    /// The `CAP_HEIGHT` property, when present and numeric
    pub fn cap_height(&self) -> Option<i32> {
        self.property(CAP_HEIGHT)
            .and_then(PropertyValue::as_int)
            .and_then(|value| i32::try_from(value).ok())
    }

    /// Union of every inked glyph's bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        self.glyphs
            .iter()
            .map(Glyph::bounding_box)
            .filter(|bbox| !bbox.is_empty())
            .reduce(|acc, bbox| acc.union(&bbox))
            .unwrap_or_default()
    }
}

impl GlyphStore for Font {
    fn contains(&self, codepoint: Codepoint) -> bool {
        Font::contains(self, codepoint)
    }

    fn glyph(&self, codepoint: Codepoint) -> Option<&Glyph> {
        Font::glyph(self, codepoint)
    }

    fn register(&mut self, glyph: Glyph) -> Result<()> {
        self.add_glyph(glyph).map(|_| ())
    }

    fn cap_height(&self) -> Option<i32> {
        Font::cap_height(self)
    }
}
