//! Ordering properties of the reveal sequence, driven by loaders whose
//! completion the test controls.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;

use lumo_interface::loader::StyleLoader;
use lumo_interface::reveal::{RevealSurface, RevealTarget};
use lumo_reveal::sequencer::{Sequencer, SequencerConfig, EXEMPT_SECTION};
use lumo_reveal::snapshot::{PageSnapshot, StyleRef};
use lumo_shared::types::Result;

type EventLog = Rc<RefCell<Vec<String>>>;

/// Completes a load only once the matching gate has been opened. Loads
/// without a gate complete immediately.
struct GatedLoader {
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    events: EventLog,
}

impl StyleLoader for GatedLoader {
    async fn load(&self, href: &str) -> Result<()> {
        let gate = self.gates.borrow_mut().remove(href);

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.events.borrow_mut().push(format!("loaded {href}"));
        Ok(())
    }
}

struct LoggingSurface {
    events: EventLog,
}

impl RevealSurface for LoggingSurface {
    fn reveal(&self, target: &RevealTarget) -> bool {
        self.events.borrow_mut().push(format!("revealed {target}"));
        true
    }
}

fn refs(hrefs: &[&str]) -> Vec<StyleRef> {
    hrefs.iter().map(|href| StyleRef::from(*href)).collect()
}

fn position(events: &[String], needle: &str) -> usize {
    events
        .iter()
        .position(|entry| entry == needle)
        .unwrap_or_else(|| panic!("event not seen: {needle}"))
}

#[test]
fn chrome_is_revealed_before_styled_sections() {
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));

    let (open_b, gate_b) = oneshot::channel();
    let (open_c, gate_c) = oneshot::channel();

    let mut gates = HashMap::new();
    gates.insert("/b.css".to_string(), gate_b);
    gates.insert("/c.css".to_string(), gate_c);

    let loader = GatedLoader {
        gates: RefCell::new(gates),
        events: events.clone(),
    };
    let surface = LoggingSurface { events: events.clone() };

    let sequencer = Sequencer::with_config(SequencerConfig {
        critical: refs(&["/a.css", "/b.css", "/c.css"]),
        exempt_section: EXEMPT_SECTION.to_string(),
    });

    let snapshot = PageSnapshot {
        satisfied: refs(&["https://example.org/a.css"]),
        candidates: vec![],
        chrome: vec!["site-header".to_string(), "site-nav".to_string()],
        sections: vec!["hero-section".to_string(), "about-section".to_string()],
    };

    let report = block_on(async {
        let run = sequencer.run(&snapshot, &loader, &surface);

        // Completion order inside the join must not matter.
        let open_gates = async {
            let _ = open_c.send(());
            let _ = open_b.send(());
        };

        let (report, ()) = futures::join!(run, open_gates);
        report
    });

    let events = events.borrow();
    let header = position(&events, "revealed chrome #site-header");
    let hero = position(&events, "revealed section #hero-section");
    let loaded_b = position(&events, "loaded /b.css");
    let loaded_c = position(&events, "loaded /c.css");

    assert!(header < hero);
    assert!(loaded_b < hero);
    assert!(loaded_c < hero);
    assert!(!events.iter().any(|entry| entry.contains("about-section")));
    assert!(report.was_revealed(&RevealTarget::Chrome("site-header".to_string())));
}

#[test]
fn styled_sections_do_not_wait_for_deferred_styles() {
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));

    let (open_deferred, gate_deferred) = oneshot::channel();

    let mut gates = HashMap::new();
    gates.insert("https://example.org/static/css/home/home.css".to_string(), gate_deferred);

    let loader = GatedLoader {
        gates: RefCell::new(gates),
        events: events.clone(),
    };
    let surface = LoggingSurface { events: events.clone() };

    let sequencer = Sequencer::with_config(SequencerConfig {
        critical: refs(&["/static/css/base.css"]),
        exempt_section: EXEMPT_SECTION.to_string(),
    });

    let snapshot = PageSnapshot {
        satisfied: refs(&["https://example.org/static/css/base.css"]),
        candidates: refs(&["https://example.org/static/css/home/home.css"]),
        chrome: vec!["site-header".to_string()],
        sections: vec!["hero-section".to_string()],
    };

    block_on(async {
        let run = sequencer.run(&snapshot, &loader, &surface);

        let open_gates = async {
            let _ = open_deferred.send(());
        };

        futures::join!(run, open_gates);
    });

    let events = events.borrow();
    let hero = position(&events, "revealed section #hero-section");
    let deferred = position(&events, "loaded https://example.org/static/css/home/home.css");

    // The critical-dependent reveal must not be gated on deferred styles.
    assert!(hero < deferred);
}
