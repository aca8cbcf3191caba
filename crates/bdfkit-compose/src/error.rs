//! Why a glyph could not be synthesized

use std::fmt;

use bdfkit_core::{Codepoint, FontError};
use bdfkit_unicode::CombiningClass;
use thiserror::Error;

/// Outcome of a failed synthesis attempt
///
/// Everything except [`SynthesisError::Font`] is routine: most code points
/// in a decomposition table can't be built from the glyphs a given font
/// has, and batch filling just counts those. `Font` means the store
/// rejected a glyph and aborts the whole operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("No decomposition for U+{0:04X}")]
    DecompositionMissing(Codepoint),

    #[error("Cannot build U+{codepoint:04X}: component U+{component:04X} is unavailable")]
    ComponentUnavailable {
        codepoint: Codepoint,
        component: Codepoint,
        #[source]
        source: Box<SynthesisError>,
    },

    #[error("Cannot build U+{codepoint:04X}: combining class {class} is not supported")]
    UnsupportedCombiningClass {
        codepoint: Codepoint,
        class: CombiningClass,
    },

    #[error("U+{0:04X} is part of its own decomposition")]
    CyclicDecomposition(Codepoint),

    #[error(transparent)]
    Font(#[from] FontError),
}

impl SynthesisError {
    /// Whether a batch fill should count this failure and carry on
    pub fn is_routine(&self) -> bool {
        !matches!(self, SynthesisError::Font(_))
    }

    /// The innermost error of a chain of unavailable components
    pub fn root_cause(&self) -> &SynthesisError {
        let mut err = self;
        while let SynthesisError::ComponentUnavailable { source, .. } = err {
            err = source;
        }
        err
    }

    /// What ultimately went wrong, for tallying
    ///
    /// `None` for [`SynthesisError::Font`], which is never tallied.
    pub fn cause(&self) -> Option<FailureCause> {
        match self.root_cause() {
            SynthesisError::DecompositionMissing(codepoint) => {
                Some(FailureCause::MissingDecomposition(*codepoint))
            }
            SynthesisError::UnsupportedCombiningClass { class, .. } => {
                Some(FailureCause::UnsupportedClass(*class))
            }
            SynthesisError::CyclicDecomposition(codepoint) => Some(FailureCause::Cycle(*codepoint)),
            SynthesisError::ComponentUnavailable { .. } | SynthesisError::Font(_) => None,
        }
    }
}

/// The root cause of a routine failure
///
/// Failures sharing a cause are grouped together by
/// [`FillReport::tally`](crate::FillReport::tally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureCause {
    /// The font lacks this glyph and it can't be built either
    MissingDecomposition(Codepoint),
    /// A component uses a placement synthesis can't draw
    UnsupportedClass(CombiningClass),
    /// This code point's decomposition leads back to itself
    Cycle(Codepoint),
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCause::MissingDecomposition(codepoint) => {
                write!(f, "missing glyph U+{codepoint:04X}")
            }
            FailureCause::UnsupportedClass(class) => {
                write!(f, "unsupported combining class {class}")
            }
            FailureCause::Cycle(codepoint) => {
                write!(f, "cyclic decomposition of U+{codepoint:04X}")
            }
        }
    }
}
