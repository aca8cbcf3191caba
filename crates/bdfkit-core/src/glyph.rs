// this_file: crates/bdfkit-core/src/glyph.rs

//! Bitmap glyphs and the merge primitive
//!
//! A glyph is a rectangle of binary pixels positioned relative to its origin.
//! Every composite glyph bdfkit builds, and every cosmetic effect it applies,
//! comes down to [`Glyph::merge`]: union two bounding boxes, re-align both
//! bitmaps into the new box, OR the rows together.

use std::fmt;

use bitvec::prelude::*;

use crate::error::BitmapError;
use crate::types::Codepoint;

/// One bitmap row, leftmost pixel first
///
/// The row's length is always the width of the bounding box it belongs to,
/// so a row can never hold a pixel outside its glyph.
pub type BitRow = BitVec<u64, Msb0>;

/// The pixel rectangle a glyph's bitmap occupies, relative to its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column to the right of the box
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// First row above the box
    pub fn top(&self) -> i32 {
        self.y + self.height as i32
    }

    /// True when the box covers no pixels at all
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Smallest box containing both boxes
    ///
    /// An empty box still pins its corner: the union always reaches the
    /// anchor of both operands, whatever their size.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let top = self.top().max(other.top());

        BoundingBox {
            x,
            y,
            width: (right - x) as u32,
            height: (top - y) as u32,
        }
    }

    pub fn contains_row(&self, y: i32) -> bool {
        self.y <= y && y < self.top()
    }

    pub fn contains_column(&self, x: i32) -> bool {
        self.x <= x && x < self.right()
    }
}

/// How [`Glyph::merge_with`] updates the receiver's advance width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvanceRule {
    /// Whichever reaches further: the receiver's advance or the source's,
    /// measured from the receiver's origin
    #[default]
    Union,
    /// Leave the receiver's advance untouched
    Keep,
    /// Add the source's advance to the receiver's
    Append,
}

/// A glyph bitmap plus its metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    name: String,
    codepoint: Option<Codepoint>,
    bbox: BoundingBox,
    advance: i32,
    /// Bottom row first: `rows[i]` covers `y = bbox.y + i`
    rows: Vec<BitRow>,
}

impl Glyph {
    /// A glyph with no pixels, anchored at its origin
    pub fn empty(name: impl Into<String>, codepoint: Option<Codepoint>) -> Self {
        Self {
            name: name.into(),
            codepoint,
            bbox: BoundingBox::default(),
            advance: 0,
            rows: Vec::new(),
        }
    }

    /// Builds a glyph from bottom-to-top bit rows
    ///
    /// Fails when the row count differs from the box height or any row is
    /// not exactly as wide as the box.
    pub fn from_rows(
        name: impl Into<String>,
        codepoint: Option<Codepoint>,
        bbox: BoundingBox,
        advance: i32,
        rows: Vec<BitRow>,
    ) -> Result<Self, BitmapError> {
        if rows.len() != bbox.height as usize {
            return Err(BitmapError::RowCount {
                expected: bbox.height as usize,
                actual: rows.len(),
            });
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != bbox.width as usize {
                return Err(BitmapError::RowWidth {
                    row: index,
                    expected: bbox.width as usize,
                    actual: row.len(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            codepoint,
            bbox,
            advance,
            rows,
        })
    }

    /// Builds a glyph from hex rows, top row first
    ///
    /// Each row is read most significant bit first; the digits may be padded
    /// past the box width to any nibble or byte boundary, but padding bits
    /// must be clear.
    pub fn from_hex_rows<S: AsRef<str>>(
        name: impl Into<String>,
        codepoint: Option<Codepoint>,
        bbox: BoundingBox,
        advance: i32,
        hex_rows: &[S],
    ) -> Result<Self, BitmapError> {
        if hex_rows.len() != bbox.height as usize {
            return Err(BitmapError::RowCount {
                expected: bbox.height as usize,
                actual: hex_rows.len(),
            });
        }

        let mut rows = hex_rows
            .iter()
            .enumerate()
            .map(|(index, hex)| parse_hex_row(index, hex.as_ref().trim(), bbox.width))
            .collect::<Result<Vec<_>, _>>()?;
        rows.reverse();

        Self::from_rows(name, codepoint, bbox, advance, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codepoint(&self) -> Option<Codepoint> {
        self.codepoint
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn advance(&self) -> i32 {
        self.advance
    }

    /// Bit rows, bottom row first
    pub fn rows(&self) -> &[BitRow] {
        &self.rows
    }

    /// The row covering `y`, if the bounding box reaches it
    pub fn row_at(&self, y: i32) -> Option<&BitRow> {
        if !self.bbox.contains_row(y) {
            return None;
        }
        self.rows.get((y - self.bbox.y) as usize)
    }

    /// Whether the pixel at `(x, y)` is inked
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if !self.bbox.contains_column(x) {
            return false;
        }
        self.row_at(y)
            .map(|row| row[(x - self.bbox.x) as usize])
            .unwrap_or(false)
    }

    /// Coordinates of every inked pixel, bottom row first
    pub fn ink(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(index, row)| {
            let y = self.bbox.y + index as i32;
            row.iter_ones()
                .map(move |column| (self.bbox.x + column as i32, y))
        })
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.not_any())
    }

    /// Height of the top edge of the ink above the origin line
    ///
    /// Zero for a glyph without ink.
    pub fn ink_ascent(&self) -> i32 {
        self.rows
            .iter()
            .rposition(|row| row.any())
            .map(|index| self.bbox.y + index as i32 + 1)
            .unwrap_or(0)
    }

    /// Depth of the ink below the origin line, never negative
    pub fn ink_descent(&self) -> i32 {
        self.rows
            .iter()
            .position(|row| row.any())
            .map(|index| -(self.bbox.y + index as i32))
            .unwrap_or(0)
            .max(0)
    }

    /// Bitmap as hex rows, top row first
    ///
    /// Every row has the same number of digits: the box width rounded up to
    /// a whole nibble, with the spare low bits zeroed.
    pub fn hex_rows(&self) -> Vec<String> {
        let digits = (self.bbox.width as usize).div_ceil(4);
        self.rows
            .iter()
            .rev()
            .map(|row| {
                (0..digits)
                    .map(|digit| {
                        let nibble = (0..4).fold(0u32, |acc, bit| {
                            let set = row
                                .get(digit * 4 + bit)
                                .map(|pixel| *pixel)
                                .unwrap_or(false);
                            (acc << 1) | u32::from(set)
                        });
                        // A nibble always fits a hex digit
                        char::from_digit(nibble, 16)
                            .unwrap_or('0')
                            .to_ascii_uppercase()
                    })
                    .collect()
            })
            .collect()
    }

    /// Composites `source` onto this glyph with its origin at `(dx, dy)`
    ///
    /// The bounding box grows to the union of both boxes and the advance to
    /// whichever reaches further. Merging a glyph onto itself goes through a
    /// copy: `let copy = glyph.clone(); glyph.merge(&copy, 1, 0);`.
    pub fn merge(&mut self, source: &Glyph, dx: i32, dy: i32) {
        self.merge_with(source, dx, dy, AdvanceRule::Union);
    }

    /// [`Glyph::merge`] with an explicit advance rule
    pub fn merge_with(&mut self, source: &Glyph, dx: i32, dy: i32, rule: AdvanceRule) {
        let placed = source.bbox.translate(dx, dy);
        let bbox = self.bbox.union(&placed);
        let advance = match rule {
            AdvanceRule::Union => self.advance.max(dx + source.advance),
            AdvanceRule::Keep => self.advance,
            AdvanceRule::Append => self.advance + source.advance,
        };

        let own_shift = (self.bbox.x - bbox.x) as usize;
        let source_shift = (placed.x - bbox.x) as usize;
        let rows = (bbox.y..bbox.top())
            .map(|y| {
                let mut row = BitRow::repeat(false, bbox.width as usize);
                blit(&mut row, self.row_at(y), own_shift);
                blit(&mut row, source.row_at(y - dy), source_shift);
                row
            })
            .collect();

        self.bbox = bbox;
        self.advance = advance;
        self.rows = rows;
    }
}

/// ORs `source` into `target`, `shift` columns from its left edge
fn blit(target: &mut BitSlice<u64, Msb0>, source: Option<&BitRow>, shift: usize) {
    let Some(source) = source else {
        return;
    };
    for column in source.iter_ones() {
        target.set(shift + column, true);
    }
}

fn parse_hex_row(index: usize, hex: &str, width: u32) -> Result<BitRow, BitmapError> {
    let invalid = || BitmapError::InvalidHex {
        row: index,
        value: hex.to_string(),
    };

    let mut bits = BitRow::with_capacity(hex.len() * 4);
    for ch in hex.chars() {
        let nibble = ch.to_digit(16).ok_or_else(invalid)?;
        for shift in (0..4).rev() {
            bits.push((nibble >> shift) & 1 == 1);
        }
    }

    let width = width as usize;
    if bits.len() < width {
        return Err(invalid());
    }
    if bits[width..].any() {
        return Err(BitmapError::RowOverflow {
            row: index,
            width: width as u32,
        });
    }
    bits.truncate(width);
    Ok(bits)
}

impl fmt::Display for Glyph {
    /// Draws the bitmap as text, always including the origin
    ///
    /// `#` marks ink, `+` the origin, `|` and `-` the axes, `.` empty space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min_x = self.bbox.x.min(0);
        let max_x = (self.bbox.right() - 1).max(0);
        let min_y = self.bbox.y.min(0);
        let max_y = (self.bbox.top() - 1).max(0);

        for y in (min_y..=max_y).rev() {
            let line: String = (min_x..=max_x)
                .map(|x| match (self.pixel(x, y), x, y) {
                    (true, _, _) => '#',
                    (false, 0, 0) => '+',
                    (false, 0, _) => '|',
                    (false, _, 0) => '-',
                    _ => '.',
                })
                .collect();
            f.write_str(&line)?;
            if y != min_y {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
