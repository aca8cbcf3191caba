//! Where each component of a composite glyph is drawn

use bdfkit_core::{AdvanceRule, Glyph};
use bdfkit_unicode::CombiningClass;

/// Placement rule for a component after the first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Beside the glyph so far, at its advance
    Spacing,
    /// Centered over the glyph so far
    Above,
    /// Centered under the glyph so far
    Below,
}

impl Placement {
    /// The rule for a combining class, `None` when there isn't one
    ///
    /// This is the one list of classes synthesis supports. "Above" defers to
    /// [`CombiningClass::is_above`] so it agrees with the soft-dotted swap.
    pub fn for_class(class: CombiningClass) -> Option<Self> {
        match class {
            CombiningClass::SPACING => Some(Placement::Spacing),
            class if class.is_above() => Some(Placement::Above),
            CombiningClass::BELOW | CombiningClass::BELOW_ATTACHED => Some(Placement::Below),
            _ => None,
        }
    }

    /// Origin offset of `mark` relative to `base`, the glyph drawn so far
    ///
    /// Accents are assumed to be drawn for capital letters: with a cap
    /// height they sit at the base's ink ascent minus the cap height,
    /// without one at the ink ascent itself. Marks below drop by the base's
    /// ink descent.
    pub fn offset(self, base: &Glyph, mark: &Glyph, cap_height: Option<i32>) -> (i32, i32) {
        let bbox = base.bounding_box();
        match self {
            Placement::Spacing => (base.advance(), 0),
            Placement::Above => {
                let dy = match cap_height {
                    Some(cap_height) if bbox.height > 0 => base.ink_ascent() - cap_height,
                    _ => base.ink_ascent(),
                };
                (center(base, mark), dy)
            }
            Placement::Below => (center(base, mark), -base.ink_descent()),
        }
    }

    /// How drawing the component changes the advance
    pub fn advance_rule(self) -> AdvanceRule {
        match self {
            Placement::Spacing => AdvanceRule::Append,
            Placement::Above | Placement::Below => AdvanceRule::Keep,
        }
    }
}

/// Horizontal offset centering `mark`'s advance on `base`'s
fn center(base: &Glyph, mark: &Glyph) -> i32 {
    if base.bounding_box().width == 0 {
        return 0;
    }
    base.advance().div_euclid(2) - mark.advance().div_euclid(2)
}
