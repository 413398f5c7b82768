use std::env;
use std::fs;
use std::process::exit;

use log::LevelFilter;
use simple_logger::SimpleLogger;
use url::Url;

use lumo_interface::reveal::{RevealSurface, RevealTarget};
use lumo_shared::types::Result;
use lumo_net::style::StyleFetcher;
use lumo_reveal::sequencer::Sequencer;
use lumo_reveal::snapshot::PageSnapshot;

/// Prints reveal events instead of toggling classes on a live document
struct ConsoleSurface;

impl RevealSurface for ConsoleSurface {
    fn reveal(&self, target: &RevealTarget) -> bool {
        println!("reveal {target}");
        true
    }
}

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <snapshot.json> <base-url>", args[0]);
        eprintln!();
        eprintln!("Runs the progressive reveal sequence for the given page snapshot,");
        eprintln!("fetching stylesheets relative to <base-url>.");
        exit(1);
    }

    let snapshot = PageSnapshot::from_json(&fs::read_to_string(&args[1])?)?;
    let base_url = Url::parse(&args[2])?;

    let loader = StyleFetcher::new(base_url);
    let sequencer = Sequencer::new();

    let report = futures::executor::block_on(sequencer.run(&snapshot, &loader, &ConsoleSurface));

    println!();
    for (phase, target) in &report.revealed {
        println!("{phase:?}\t{target}");
    }
    for target in &report.missing {
        println!("missing\t{target}");
    }
    for (href, outcome) in &report.styles {
        println!("{outcome:?}\t{href}");
    }

    Ok(())
}
