//! BDF parsing

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use bdfkit_core::{BoundingBox, Font, Glyph, PropertyValue};

use crate::error::{BdfError, Result};

/// Properties the `FONT` and `SIZE` lines already determine
const HEADER_PROPERTIES: [&str; 5] = [
    "FACE_NAME",
    "POINT_SIZE",
    "PIXEL_SIZE",
    "RESOLUTION_X",
    "RESOLUTION_Y",
];

/// Per-glyph keywords with nothing a [`Font`] keeps
const IGNORED_GLYPH_KEYWORDS: [&str; 5] = ["SWIDTH", "SWIDTH1", "DWIDTH1", "VVECTOR", "ATTRIBUTES"];

/// Reads a BDF font from any reader
pub fn read_bdf<R: Read>(mut reader: R) -> Result<Font> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    read_bdf_str(&text)
}

/// Reads a BDF font file
pub fn read_bdf_file(path: impl AsRef<Path>) -> Result<Font> {
    let text = fs::read_to_string(path.as_ref())?;
    let font = read_bdf_str(&text)?;
    log::debug!(
        "Read {} glyphs from {}",
        font.glyph_count(),
        path.as_ref().display()
    );
    Ok(font)
}

/// Parses BDF text
pub fn read_bdf_str(text: &str) -> Result<Font> {
    Parser::new(text).font()
}

/// Font-level values seen before the font can be created
#[derive(Default)]
struct Header {
    name: String,
    decipoints: u32,
    resolution: (u32, u32),
}

impl Header {
    fn font(&self) -> Font {
        Font::with_decipoints(
            self.name.clone(),
            self.decipoints,
            self.resolution.0,
            self.resolution.1,
        )
    }
}

struct Parser<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    /// 1-based number of the line last read
    line: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            line: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> BdfError {
        BdfError::parse(self.line, message)
    }

    /// The next non-blank line, split into its keyword and the rest
    fn next_line(&mut self) -> Result<(&'a str, &'a str)> {
        for (index, raw) in self.lines.by_ref() {
            self.line = index + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            return Ok(match line.split_once(char::is_whitespace) {
                Some((keyword, rest)) => (keyword, rest.trim()),
                None => (line, ""),
            });
        }
        Err(BdfError::UnexpectedEof)
    }

    /// The next line as it is, blank or not
    fn next_raw(&mut self) -> Result<&'a str> {
        let (index, raw) = self.lines.next().ok_or(BdfError::UnexpectedEof)?;
        self.line = index + 1;
        Ok(raw.trim())
    }

    fn expect(&mut self, keyword: &str) -> Result<&'a str> {
        let (found, rest) = self.next_line()?;
        if found != keyword {
            return Err(self.error(format!("expected {keyword}, found {found}")));
        }
        Ok(rest)
    }

    /// The first `N` whitespace-separated numbers of `rest`
    fn numbers<T, const N: usize>(&self, keyword: &str, rest: &str) -> Result<[T; N]>
    where
        T: FromStr + Copy + Default,
    {
        let mut values = [T::default(); N];
        let mut parts = rest.split_whitespace();
        for (index, value) in values.iter_mut().enumerate() {
            let part = parts
                .next()
                .ok_or_else(|| self.error(format!("{keyword} needs {N} values, found {index}")))?;
            *value = part
                .parse()
                .map_err(|_| self.error(format!("{keyword}: {part:?} is not a number")))?;
        }
        Ok(values)
    }

    fn font(mut self) -> Result<Font> {
        let version = self.expect("STARTFONT")?;
        log::trace!("Reading BDF {version}");

        let mut header = Header::default();
        let mut comments = Vec::new();
        let mut font = None;

        loop {
            let (keyword, rest) = self.next_line()?;
            match keyword {
                "COMMENT" => comments.push(rest),
                "FONT" => header.name = rest.to_string(),
                "SIZE" => {
                    let [points, xdpi, ydpi] = self.numbers::<f64, 3>(keyword, rest)?;
                    if [points, xdpi, ydpi]
                        .iter()
                        .any(|value| value.is_nan() || *value < 0.0)
                    {
                        return Err(self.error(format!("SIZE {rest:?} is not a valid size")));
                    }
                    header.decipoints = (points * 10.0).round() as u32;
                    header.resolution = (xdpi.round() as u32, ydpi.round() as u32);
                }
                // Derived from the glyphs when writing
                "FONTBOUNDINGBOX" => {
                    self.numbers::<i32, 4>(keyword, rest)?;
                }
                "STARTPROPERTIES" => {
                    let [count] = self.numbers::<usize, 1>(keyword, rest)?;
                    let font = font.get_or_insert_with(|| header.font());
                    for index in 0..count {
                        self.property(font, index, count)?;
                    }
                    self.expect("ENDPROPERTIES")?;
                }
                "CHARS" => {
                    let [count] = self.numbers::<usize, 1>(keyword, rest)?;
                    let font = font.get_or_insert_with(|| header.font());
                    for index in 0..count {
                        self.glyph(font, index, count)?;
                    }
                    self.expect("ENDFONT")?;
                    break;
                }
                "ENDFONT" => break,
                _ => log::warn!("Skipping unknown keyword {keyword} on line {}", self.line),
            }
        }

        let mut font = font.unwrap_or_else(|| header.font());
        for comment in comments {
            font.add_comment(comment);
        }
        Ok(font)
    }

    fn property(&mut self, font: &mut Font, index: usize, count: usize) -> Result<()> {
        let (key, value) = self.next_line()?;
        if key == "ENDPROPERTIES" {
            return Err(self.error(format!("expected {count} properties, found {index}")));
        }

        let parsed = parse_property_value(value)
            .ok_or_else(|| self.error(format!("bad value for property {key}: {value:?}")))?;
        if HEADER_PROPERTIES.contains(&key) {
            log::trace!("Ignoring {key}, the font header sets it");
        } else {
            font.set_property(key, parsed);
        }
        Ok(())
    }

    fn glyph(&mut self, font: &mut Font, index: usize, count: usize) -> Result<()> {
        let (keyword, name) = self.next_line()?;
        match keyword {
            "STARTCHAR" => {}
            "ENDFONT" => {
                return Err(self.error(format!("expected {count} glyphs, found {index}")));
            }
            _ => return Err(self.error(format!("expected STARTCHAR, found {keyword}"))),
        }
        let start = self.line;

        let mut codepoint = None;
        let mut advance = 0;
        let mut bbox = BoundingBox::default();
        let has_bitmap = loop {
            let (keyword, rest) = self.next_line()?;
            match keyword {
                "ENCODING" => {
                    let [encoding] = self.numbers::<i64, 1>(keyword, rest)?;
                    codepoint = u32::try_from(encoding).ok();
                }
                "DWIDTH" => {
                    [advance] = self.numbers::<i32, 1>(keyword, rest)?;
                }
                "BBX" => {
                    let [width, height, x, y] = self.numbers::<i32, 4>(keyword, rest)?;
                    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height))
                    else {
                        return Err(self.error(format!("BBX of {name} has a negative size")));
                    };
                    bbox = BoundingBox::new(x, y, width, height);
                }
                "BITMAP" => break true,
                "ENDCHAR" => break false,
                _ if IGNORED_GLYPH_KEYWORDS.contains(&keyword) => {}
                _ => log::warn!("Skipping unknown keyword {keyword} on line {}", self.line),
            }
        };

        // Grown as rows arrive; the BBX height is untrusted
        let mut rows = Vec::new();
        if has_bitmap {
            for row in 0..bbox.height {
                let line = self.next_raw()?;
                if line == "ENDCHAR" {
                    return Err(self.error(format!(
                        "{name} needs {} bitmap rows, found {row}",
                        bbox.height
                    )));
                }
                rows.push(line);
            }
            self.expect("ENDCHAR")?;
        }

        let glyph = Glyph::from_hex_rows(name, codepoint, bbox, advance, &rows)
            .map_err(|err| BdfError::parse(start, format!("glyph {name}: {err}")))?;
        font.add_glyph(glyph)?;
        Ok(())
    }
}

/// A quoted string with `""` escapes, or an integer
fn parse_property_value(value: &str) -> Option<PropertyValue> {
    if let Some(quoted) = value.strip_prefix('"') {
        let inner = quoted.strip_suffix('"')?;
        return Some(PropertyValue::Str(inner.replace("\"\"", "\"")));
    }
    value.parse::<i64>().ok().map(PropertyValue::Int)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bdfkit_core::FontError;

    fn font_with(body: &str) -> String {
        format!(
            "STARTFONT 2.1\nFONT TestFont\nSIZE 12 100 100\nFONTBOUNDINGBOX 0 0 0 0\n{body}ENDFONT\n"
        )
    }

    #[test]
    fn property_values_are_unquoted() {
        assert_eq!(
            parse_property_value("\"Neville \"\"The Banker\"\" Robinson\""),
            Some(PropertyValue::from("Neville \"The Banker\" Robinson"))
        );
        assert_eq!(parse_property_value("\"\""), Some(PropertyValue::from("")));
        assert_eq!(parse_property_value("-7"), Some(PropertyValue::Int(-7)));
        assert_eq!(parse_property_value("\"open"), None);
        assert_eq!(parse_property_value("1.5"), None);
    }

    #[test]
    fn fractional_point_sizes_are_kept() {
        let font = read_bdf_str(
            "STARTFONT 2.1\nFONT TestFont\nSIZE 12.2 100 100\nFONTBOUNDINGBOX 0 0 0 0\nCHARS 0\nENDFONT\n",
        )
        .unwrap();
        assert_eq!(font.decipoints(), 122);
        assert_eq!(font.point_size(), 12);
        assert_eq!(font.resolution(), (100, 100));

        let err = read_bdf_str(
            "STARTFONT 2.1\nFONT TestFont\nSIZE -1 100 100\nFONTBOUNDINGBOX 0 0 0 0\nCHARS 0\nENDFONT\n",
        )
        .unwrap_err();
        assert!(matches!(err, BdfError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn header_properties_come_from_the_header() {
        let font = read_bdf_str(
            "STARTFONT 2.1\n\
             FONT TestFont\n\
             SIZE 1 2 3\n\
             FONTBOUNDINGBOX 0 0 0 0\n\
             STARTPROPERTIES 6\n\
             FACE_NAME \"NotATestFont\"\n\
             POINT_SIZE 456\n\
             PIXEL_SIZE 789\n\
             RESOLUTION_X 012\n\
             RESOLUTION_Y 345\n\
             FOUNDRY \"Adobe\"\n\
             ENDPROPERTIES\n\
             CHARS 0\n\
             ENDFONT\n",
        )
        .unwrap();

        assert_eq!(font.property("FACE_NAME"), Some(&PropertyValue::from("TestFont")));
        assert_eq!(font.property("POINT_SIZE"), Some(&PropertyValue::Int(1)));
        assert_eq!(font.property("RESOLUTION_X"), Some(&PropertyValue::Int(2)));
        assert_eq!(font.property("RESOLUTION_Y"), Some(&PropertyValue::Int(3)));
        assert_eq!(font.property("PIXEL_SIZE"), None);
        assert_eq!(font.pixel_size(), 0);
        assert_eq!(font.property("FOUNDRY"), Some(&PropertyValue::from("Adobe")));
    }

    #[test]
    fn unencoded_glyphs_and_unknown_keywords() {
        let font = read_bdf_str(&font_with(
            "CONTENTVERSION 3\n\
             CHARS 1\n\
             STARTCHAR orphan\n\
             ENCODING -1\n\
             SWIDTH 500 0\n\
             DWIDTH 2 0\n\
             BBX 1 1 0 0\n\
             ATTRIBUTES 01C0\n\
             BITMAP\n\
             80\n\
             ENDCHAR\n",
        ))
        .unwrap();

        let glyph = &font.glyphs()[0];
        assert_eq!(glyph.name(), "orphan");
        assert_eq!(glyph.codepoint(), None);
        assert_eq!(glyph.advance(), 2);
        assert_eq!(glyph.hex_rows(), vec!["8"]);
    }

    #[test]
    fn glyphs_without_a_bitmap_are_blank() {
        let font = read_bdf_str(&font_with(
            "CHARS 1\nSTARTCHAR space\nENCODING 32\nDWIDTH 4 0\nBBX 0 0 0 0\nENDCHAR\n",
        ))
        .unwrap();
        let space = font.glyph(32).unwrap();
        assert!(space.is_blank());
        assert_eq!(space.advance(), 4);
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = read_bdf_str(&font_with(
            "CHARS 1\nSTARTCHAR a\nENCODING 97\nBBX 2 1 0 0\nBITMAP\nZZ\nENDCHAR\n",
        ))
        .unwrap_err();
        // The glyph starts on line 6
        assert!(
            matches!(err, BdfError::Parse { line: 6, ref message } if message.contains("glyph a")),
            "{err}"
        );

        let err = read_bdf_str(&font_with("STARTPROPERTIES 1\nFOUNDRY Adobe\nENDPROPERTIES\n"))
            .unwrap_err();
        assert!(matches!(err, BdfError::Parse { line: 6, .. }), "{err}");

        let err = read_bdf_str("FONT x\n").unwrap_err();
        assert!(matches!(err, BdfError::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn glyph_counts_must_match() {
        let err = read_bdf_str(&font_with("CHARS 2\nSTARTCHAR a\nBBX 0 0 0 0\nENDCHAR\n"))
            .unwrap_err();
        assert!(err.to_string().contains("expected 2 glyphs, found 1"), "{err}");

        let err = read_bdf_str(&font_with(
            "CHARS 1\nSTARTCHAR a\nBBX 1 2 0 0\nBITMAP\n80\nENDCHAR\n",
        ))
        .unwrap_err();
        assert!(err.to_string().contains("needs 2 bitmap rows, found 1"), "{err}");
    }

    #[test]
    fn huge_boxes_fail_on_the_missing_rows() {
        let err = read_bdf_str(&font_with(
            "CHARS 1\nSTARTCHAR tall\nENCODING 65\nBBX 1 2000000000 0 0\nBITMAP\n80\nENDCHAR\n",
        ))
        .unwrap_err();
        assert!(
            matches!(err, BdfError::Parse { line: 11, ref message }
                if message.contains("needs 2000000000 bitmap rows, found 1")),
            "{err}"
        );
    }

    #[test]
    fn duplicate_encodings_are_rejected() {
        let glyph = "STARTCHAR a\nENCODING 97\nBBX 0 0 0 0\nENDCHAR\n";
        let err = read_bdf_str(&font_with(&format!("CHARS 2\n{glyph}{glyph}"))).unwrap_err();
        assert!(matches!(
            err,
            BdfError::Font(FontError::DuplicateCodepoint(97))
        ));
    }

    #[test]
    fn truncated_files_hit_eof() {
        let err = read_bdf_str("STARTFONT 2.1\nFONT x\nCHARS 1\nSTARTCHAR a\n").unwrap_err();
        assert!(matches!(err, BdfError::UnexpectedEof));
    }
}
