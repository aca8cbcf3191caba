// this_file: crates/bdfkit-unicode/src/database.rs

//! Character data: decompositions and combining classes
//!
//! The decomposition table builder only needs two facts per code point, so
//! it reads them through [`CharacterDatabase`]. [`UnicodeData`] supplies
//! them from the Unicode Character Database's `UnicodeData.txt`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use bdfkit_core::Codepoint;
use thiserror::Error;

use crate::combining::CombiningClass;

/// Errors from loading character data
#[derive(Debug, Error)]
pub enum UnicodeDataError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Formatting tag of a compatibility decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecompositionTag {
    Font,
    NoBreak,
    Initial,
    Medial,
    Final,
    Isolated,
    Circle,
    Super,
    Sub,
    Vertical,
    Wide,
    Narrow,
    Small,
    Square,
    Fraction,
    Compat,
}

impl DecompositionTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DecompositionTag::Font => "font",
            DecompositionTag::NoBreak => "noBreak",
            DecompositionTag::Initial => "initial",
            DecompositionTag::Medial => "medial",
            DecompositionTag::Final => "final",
            DecompositionTag::Isolated => "isolated",
            DecompositionTag::Circle => "circle",
            DecompositionTag::Super => "super",
            DecompositionTag::Sub => "sub",
            DecompositionTag::Vertical => "vertical",
            DecompositionTag::Wide => "wide",
            DecompositionTag::Narrow => "narrow",
            DecompositionTag::Small => "small",
            DecompositionTag::Square => "square",
            DecompositionTag::Fraction => "fraction",
            DecompositionTag::Compat => "compat",
        }
    }
}

impl FromStr for DecompositionTag {
    type Err = String;

    /// Accepts the tag with or without its angle brackets
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap_or(s);
        let tag = match name {
            "font" => DecompositionTag::Font,
            "noBreak" => DecompositionTag::NoBreak,
            "initial" => DecompositionTag::Initial,
            "medial" => DecompositionTag::Medial,
            "final" => DecompositionTag::Final,
            "isolated" => DecompositionTag::Isolated,
            "circle" => DecompositionTag::Circle,
            "super" => DecompositionTag::Super,
            "sub" => DecompositionTag::Sub,
            "vertical" => DecompositionTag::Vertical,
            "wide" => DecompositionTag::Wide,
            "narrow" => DecompositionTag::Narrow,
            "small" => DecompositionTag::Small,
            "square" => DecompositionTag::Square,
            "fraction" => DecompositionTag::Fraction,
            "compat" => DecompositionTag::Compat,
            _ => return Err(format!("unknown decomposition tag {s:?}")),
        };
        Ok(tag)
    }
}

/// One step of a character's decomposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// `None` for canonical decompositions
    pub tag: Option<DecompositionTag>,
    pub codepoints: Vec<Codepoint>,
}

impl Decomposition {
    pub fn canonical(codepoints: Vec<Codepoint>) -> Self {
        Self {
            tag: None,
            codepoints,
        }
    }

    pub fn tagged(tag: DecompositionTag, codepoints: Vec<Codepoint>) -> Self {
        Self {
            tag: Some(tag),
            codepoints,
        }
    }
}

/// Per-code-point facts the decomposition table is built from
pub trait CharacterDatabase {
    /// The character's single-level decomposition, if it has one
    fn decomposition(&self, codepoint: Codepoint) -> Option<&Decomposition>;

    /// The character's canonical combining class (0 when unlisted)
    fn combining_class(&self, codepoint: Codepoint) -> CombiningClass;
}

/// Character data read from a `UnicodeData.txt` file
///
/// Only the combining class and decomposition fields are kept.
#[derive(Debug, Clone, Default)]
pub struct UnicodeData {
    decompositions: HashMap<Codepoint, Decomposition>,
    classes: HashMap<Codepoint, CombiningClass>,
}

impl UnicodeData {
    /// Reads and parses a `UnicodeData.txt` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UnicodeDataError> {
        let text = fs::read_to_string(path.as_ref())?;
        let data = Self::parse(&text)?;
        log::debug!(
            "Loaded {} decompositions from {}",
            data.decompositions.len(),
            path.as_ref().display()
        );
        Ok(data)
    }

    /// Parses `UnicodeData.txt` content
    ///
    /// Blank lines and `#` comments are skipped, which lets trimmed test
    /// fixtures annotate themselves.
    pub fn parse(text: &str) -> Result<Self, UnicodeDataError> {
        let mut data = Self::default();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parse_error = |message: String| UnicodeDataError::Parse {
                line: index + 1,
                message,
            };

            let fields: Vec<&str> = line.split(';').collect();
            if fields.len() < 6 {
                return Err(parse_error(format!(
                    "expected at least 6 fields, found {}",
                    fields.len()
                )));
            }

            let codepoint = parse_hex_codepoint(fields[0]).map_err(&parse_error)?;
            let class: u8 = fields[3]
                .trim()
                .parse()
                .map_err(|_| parse_error(format!("bad combining class {:?}", fields[3])))?;
            if class != 0 {
                data.classes.insert(codepoint, CombiningClass(class));
            }

            if let Some(decomposition) = parse_decomposition(fields[5]).map_err(&parse_error)? {
                data.decompositions.insert(codepoint, decomposition);
            }
        }

        Ok(data)
    }

    /// Number of characters with a decomposition
    pub fn decomposition_count(&self) -> usize {
        self.decompositions.len()
    }
}

impl CharacterDatabase for UnicodeData {
    fn decomposition(&self, codepoint: Codepoint) -> Option<&Decomposition> {
        self.decompositions.get(&codepoint)
    }

    fn combining_class(&self, codepoint: Codepoint) -> CombiningClass {
        self.classes.get(&codepoint).copied().unwrap_or_default()
    }
}

fn parse_hex_codepoint(field: &str) -> Result<Codepoint, String> {
    Codepoint::from_str_radix(field.trim(), 16).map_err(|_| format!("bad code point {field:?}"))
}

fn parse_decomposition(field: &str) -> Result<Option<Decomposition>, String> {
    let mut parts = field.split_whitespace().peekable();
    let Some(first) = parts.peek() else {
        return Ok(None);
    };

    let tag = if first.starts_with('<') {
        let tag = first.parse::<DecompositionTag>()?;
        parts.next();
        Some(tag)
    } else {
        None
    };

    let codepoints = parts
        .map(parse_hex_codepoint)
        .collect::<Result<Vec<_>, _>>()?;
    if codepoints.is_empty() {
        return Err(format!("decomposition {field:?} has no code points"));
    }

    Ok(Some(Decomposition { tag, codepoints }))
}
