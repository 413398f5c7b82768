pub mod report;
pub mod sequencer;
pub mod snapshot;
