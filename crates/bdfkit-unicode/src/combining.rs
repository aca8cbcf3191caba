//! Canonical combining classes

use std::fmt;

/// A Unicode canonical combining class
///
/// Any value from 0 to 254 can appear in character data; the named
/// constants are the ones with a meaning for glyph synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CombiningClass(pub u8);

impl CombiningClass {
    /// Ordinary spacing characters
    pub const SPACING: Self = Self(0);
    /// Attached below (cedilla, ogonek)
    pub const BELOW_ATTACHED: Self = Self(202);
    /// Attached above
    pub const ABOVE_ATTACHED: Self = Self(214);
    /// Below
    pub const BELOW: Self = Self(220);
    /// Above
    pub const ABOVE: Self = Self(230);

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether a mark of this class is drawn over its base
    ///
    /// Soft-dotted bases lose their dot under such marks.
    pub fn is_above(self) -> bool {
        ABOVE_CLASSES.contains(&self)
    }
}

/// Classes that place a mark above its base
pub const ABOVE_CLASSES: [CombiningClass; 2] =
    [CombiningClass::ABOVE_ATTACHED, CombiningClass::ABOVE];

impl From<u8> for CombiningClass {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for CombiningClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
