use lumo_interface::reveal::RevealTarget;

use crate::snapshot::StyleRef;

/// The reveal phase in which a target became visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Body, header and nav, before any stylesheet work
    Chrome,
    /// Sections revealed once the critical styles settled
    Critical,
    /// The sweep after the remaining deferred styles settled
    Full,
}

/// What happened to a single stylesheet during the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fetched and usable for rendering
    Loaded,
    /// The load failed; the phase proceeded without it
    Failed,
    /// Already applied by the document, not fetched again
    AlreadySatisfied,
    /// Candidate skipped because a critical entry covers the same resource
    Duplicate,
}

/// Structured result of one reveal sequence. The caller can replay the
/// reveals against another surface or inspect what went wrong.
#[derive(Debug, Default)]
pub struct RevealReport {
    /// Targets that became visible, in reveal order
    pub revealed: Vec<(Phase, RevealTarget)>,
    /// Targets the surface reported as absent
    pub missing: Vec<RevealTarget>,
    /// Per-stylesheet outcomes
    pub styles: Vec<(StyleRef, LoadOutcome)>,
}

impl RevealReport {
    pub fn was_revealed(&self, target: &RevealTarget) -> bool {
        self.revealed.iter().any(|(_, t)| t == target)
    }

    pub fn revealed_in(&self, phase: Phase) -> impl Iterator<Item = &RevealTarget> {
        self.revealed.iter().filter(move |(p, _)| *p == phase).map(|(_, t)| t)
    }

    pub fn outcome_of(&self, href: &str) -> Option<LoadOutcome> {
        self.styles.iter().find(|(s, _)| s.as_str() == href).map(|(_, o)| *o)
    }
}
