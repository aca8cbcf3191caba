//! What a batch fill did

use std::collections::HashMap;
use std::fmt;

use bdfkit_core::Codepoint;

use crate::error::{FailureCause, SynthesisError};

/// Summary of a batch fill
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Code points the fill tried to resolve
    pub attempted: usize,
    /// Every glyph added to the store, components built along the way
    /// included, in the order they were registered
    pub built: Vec<Codepoint>,
    /// Attempts that found the glyph already in the store
    pub already_present: usize,
    /// Attempts that failed, with the reason
    pub failures: Vec<(Codepoint, SynthesisError)>,
}

impl FillReport {
    pub fn built_count(&self) -> usize {
        self.built.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Failures grouped by root cause, least frequent first
    pub fn tally(&self) -> Vec<(FailureCause, usize)> {
        let mut counts: HashMap<FailureCause, usize> = HashMap::new();
        for cause in self.failures.iter().filter_map(|(_, err)| err.cause()) {
            *counts.entry(cause).or_default() += 1;
        }

        let mut tally: Vec<_> = counts.into_iter().collect();
        tally.sort_by(|(a_cause, a_count), (b_cause, b_count)| {
            a_count.cmp(b_count).then_with(|| a_cause.cmp(b_cause))
        });
        tally
    }
}

impl fmt::Display for FillReport {
    /// The counts, then one line per failure cause
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "attempted {}, built {}, already present {}, failed {}",
            self.attempted,
            self.built_count(),
            self.already_present,
            self.failure_count()
        )?;

        let tally = self.tally();
        if tally.is_empty() {
            return Ok(());
        }
        writeln!(f, "count cause")?;
        for (cause, count) in tally {
            writeln!(f, "{count:5} {cause}")?;
        }
        Ok(())
    }
}
