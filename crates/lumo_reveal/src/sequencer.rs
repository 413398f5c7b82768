use std::collections::HashSet;

use futures::future::join_all;
use log::warn;

use lumo_interface::loader::StyleLoader;
use lumo_interface::reveal::{RevealSurface, RevealTarget};

use crate::report::{LoadOutcome, Phase, RevealReport};
use crate::snapshot::{PageSnapshot, StyleRef};

/// Stylesheets whose absence visibly breaks above-the-fold content. These
/// are loaded before any dependent section becomes visible.
pub const CRITICAL_STYLES: [&str; 3] = [
    "/static/css/settings.css",
    "/static/css/base.css",
    "/static/css/landing/landing.css",
];

/// Section the sequence leaves hidden no matter what
pub const EXEMPT_SECTION: &str = "about-section";

/// Fixed configuration of the sequencer. Set at construction; there is no
/// runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct SequencerConfig {
    /// Critical stylesheet allowlist, as site-rooted addresses
    pub critical: Vec<StyleRef>,

    /// Id of the section that is never auto-revealed
    pub exempt_section: String,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            critical: CRITICAL_STYLES.iter().map(|href| StyleRef::new(*href)).collect(),
            exempt_section: EXEMPT_SECTION.to_string(),
        }
    }
}

/// Critical entries not yet satisfied by a stylesheet the document already
/// applied. Applying this to an already-satisfied set yields an empty list.
pub fn critical_to_load<'a>(critical: &'a [StyleRef], satisfied: &[StyleRef]) -> Vec<&'a StyleRef> {
    critical
        .iter()
        .filter(|href| !satisfied.iter().any(|loaded| href.satisfied_by(loaded)))
        .collect()
}

/// Candidates not already covered by a critical entry, so nothing is
/// fetched twice.
pub fn remaining_candidates<'a>(candidates: &'a [StyleRef], critical: &[StyleRef]) -> Vec<&'a StyleRef> {
    candidates
        .iter()
        .filter(|href| !critical.iter().any(|crit| href.overlaps(crit)))
        .collect()
}

/// Drives the reveal sequence for one page load: chrome comes up
/// immediately, sections follow once the critical styles settled, and a
/// final sweep runs when the remaining deferred styles settled.
pub struct Sequencer {
    config: SequencerConfig,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            config: SequencerConfig::default(),
        }
    }

    pub fn with_config(config: SequencerConfig) -> Self {
        Self { config }
    }

    /// Runs the sequence once. The only suspension points are the two
    /// joins; if a join set is empty the dependent reveal happens without
    /// suspending. A failed load settles its join instead of blocking it.
    pub async fn run<L, S>(&self, snapshot: &PageSnapshot, loader: &L, surface: &S) -> RevealReport
    where
        L: StyleLoader,
        S: RevealSurface,
    {
        let mut report = RevealReport::default();
        let mut revealed = HashSet::new();

        // Body and chrome do not depend on any stylesheet.
        reveal_once(&RevealTarget::Body, Phase::Chrome, surface, &mut revealed, &mut report);
        for id in &snapshot.chrome {
            let target = RevealTarget::Chrome(id.clone());
            reveal_once(&target, Phase::Chrome, surface, &mut revealed, &mut report);
        }

        let pending = critical_to_load(&self.config.critical, &snapshot.satisfied);

        for href in &self.config.critical {
            if !pending.contains(&href) {
                report.styles.push((href.clone(), LoadOutcome::AlreadySatisfied));
            }
        }

        if !pending.is_empty() {
            self.load_all(&pending, loader, &mut report).await;
        }

        for id in &snapshot.sections {
            if *id != self.config.exempt_section {
                let target = RevealTarget::Section(id.clone());
                reveal_once(&target, Phase::Critical, surface, &mut revealed, &mut report);
            }
        }

        let remaining = remaining_candidates(&snapshot.candidates, &self.config.critical);

        for href in &snapshot.candidates {
            if !remaining.contains(&href) {
                report.styles.push((href.clone(), LoadOutcome::Duplicate));
            }
        }

        if !remaining.is_empty() {
            self.load_all(&remaining, loader, &mut report).await;
        }

        // Sweep up whatever the critical phase did not reveal, for instance
        // sections whose element only appeared after the snapshot was taken.
        for id in &snapshot.sections {
            if *id != self.config.exempt_section {
                let target = RevealTarget::Section(id.clone());
                reveal_once(&target, Phase::Full, surface, &mut revealed, &mut report);
            }
        }

        report
    }

    async fn load_all<L: StyleLoader>(&self, refs: &[&StyleRef], loader: &L, report: &mut RevealReport) {
        let results = join_all(refs.iter().map(|href| loader.load(href.as_str()))).await;

        for (href, result) in refs.iter().zip(results) {
            match result {
                Ok(()) => report.styles.push(((*href).clone(), LoadOutcome::Loaded)),
                Err(e) => {
                    warn!("stylesheet {href} failed to load: {e}");
                    report.styles.push(((*href).clone(), LoadOutcome::Failed));
                }
            }
        }
    }
}

/// Reveals a target at most once per sequence. Absent targets are not
/// marked revealed, so the full-phase sweep gives them one more chance.
fn reveal_once<S: RevealSurface>(
    target: &RevealTarget,
    phase: Phase,
    surface: &S,
    revealed: &mut HashSet<RevealTarget>,
    report: &mut RevealReport,
) {
    if revealed.contains(target) {
        return;
    }

    if surface.reveal(target) {
        revealed.insert(target.clone());
        report.revealed.push((phase, target.clone()));
    } else {
        warn!("cannot reveal {target}: no such element");

        if !report.missing.contains(target) {
            report.missing.push(target.clone());
        }
    }
}
