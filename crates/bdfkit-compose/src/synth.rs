//! Recursive glyph synthesis

use std::collections::HashSet;

use bdfkit_core::{AdvanceRule, Codepoint, FontError, Glyph, GlyphStore};
use bdfkit_unicode::{Component, DecompositionTable};

use crate::error::SynthesisError;
use crate::placement::Placement;
use crate::report::FillReport;

/// How a successful [`Synthesizer::resolve`] got its glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The store had it already
    AlreadyPresent,
    /// It was composed and registered
    Built,
}

/// Builds missing glyphs from the ones a store already has
///
/// The store doubles as the memo table: once a glyph is registered, later
/// lookups find it instead of building it again.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'t> {
    table: &'t DecompositionTable,
}

/// State of one top-level resolve
#[derive(Default)]
struct Session {
    visiting: HashSet<Codepoint>,
    built: Vec<Codepoint>,
}

impl<'t> Synthesizer<'t> {
    pub fn new(table: &'t DecompositionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t DecompositionTable {
        self.table
    }

    /// Makes sure `store` has a glyph for `codepoint`, building it and any
    /// missing components if it can
    ///
    /// On failure nothing is registered for `codepoint` itself, though
    /// components that could be built before the failure stay in the store.
    pub fn resolve<S: GlyphStore + ?Sized>(
        &self,
        store: &mut S,
        codepoint: Codepoint,
    ) -> Result<Resolution, SynthesisError> {
        self.resolve_in(store, codepoint, &mut Session::default())
    }

    /// Tries every code point in the table, in ascending order
    pub fn fill<S: GlyphStore + ?Sized>(&self, store: &mut S) -> Result<FillReport, FontError> {
        self.fill_codepoints(store, self.table.codepoints())
    }

    /// Tries the given code points in the given order
    ///
    /// Routine failures are collected in the report. An error from the
    /// store itself stops the fill and is returned.
    pub fn fill_codepoints<S, I>(&self, store: &mut S, order: I) -> Result<FillReport, FontError>
    where
        S: GlyphStore + ?Sized,
        I: IntoIterator<Item = Codepoint>,
    {
        let mut report = FillReport::default();

        for codepoint in order {
            report.attempted += 1;
            let mut session = Session::default();

            match self.resolve_in(store, codepoint, &mut session) {
                Ok(Resolution::AlreadyPresent) => report.already_present += 1,
                Ok(Resolution::Built) => {}
                Err(SynthesisError::Font(err)) => return Err(err),
                Err(err) => {
                    log::trace!("Skipping U+{codepoint:04X}: {err}");
                    report.failures.push((codepoint, err));
                }
            }
            report.built.append(&mut session.built);
        }

        log::info!(
            "Filled {} glyphs from {} attempts ({} failed)",
            report.built_count(),
            report.attempted,
            report.failure_count()
        );
        Ok(report)
    }

    fn resolve_in<S: GlyphStore + ?Sized>(
        &self,
        store: &mut S,
        codepoint: Codepoint,
        session: &mut Session,
    ) -> Result<Resolution, SynthesisError> {
        if store.contains(codepoint) {
            return Ok(Resolution::AlreadyPresent);
        }
        if session.visiting.contains(&codepoint) {
            return Err(SynthesisError::CyclicDecomposition(codepoint));
        }
        let components = self
            .table
            .get(codepoint)
            .ok_or(SynthesisError::DecompositionMissing(codepoint))?;

        session.visiting.insert(codepoint);
        let result = self.build(store, codepoint, components, session);
        session.visiting.remove(&codepoint);

        let glyph = result?;
        store.register(glyph)?;
        session.built.push(codepoint);
        log::debug!(
            "Built U+{codepoint:04X} from {} components",
            components.len()
        );
        Ok(Resolution::Built)
    }

    /// Resolves every component, then draws them onto a fresh glyph
    fn build<S: GlyphStore + ?Sized>(
        &self,
        store: &mut S,
        codepoint: Codepoint,
        components: &[Component],
        session: &mut Session,
    ) -> Result<Glyph, SynthesisError> {
        let mut placements = Vec::with_capacity(components.len());
        for component in components {
            let placement = Placement::for_class(component.class).ok_or(
                SynthesisError::UnsupportedCombiningClass {
                    codepoint,
                    class: component.class,
                },
            )?;
            placements.push(placement);

            self.resolve_in(store, component.codepoint, session)
                .map_err(|err| match err {
                    SynthesisError::Font(_) => err,
                    _ => SynthesisError::ComponentUnavailable {
                        codepoint,
                        component: component.codepoint,
                        source: Box::new(err),
                    },
                })?;
        }

        let cap_height = store.cap_height();
        let mut glyph = Glyph::empty(format!("uni{codepoint:04X}"), Some(codepoint));
        for (index, (component, placement)) in components.iter().zip(placements).enumerate() {
            // A store that claims a glyph but can't hand it over
            let source = store.glyph(component.codepoint).ok_or_else(|| {
                SynthesisError::ComponentUnavailable {
                    codepoint,
                    component: component.codepoint,
                    source: Box::new(SynthesisError::DecompositionMissing(component.codepoint)),
                }
            })?;

            if index == 0 {
                glyph.merge_with(source, 0, 0, AdvanceRule::Union);
            } else {
                let (dx, dy) = placement.offset(&glyph, source, cap_height);
                glyph.merge_with(source, dx, dy, placement.advance_rule());
            }
        }

        Ok(glyph)
    }
}
