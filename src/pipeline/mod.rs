pub mod features;
pub mod matching;
pub mod processor;
pub mod remote;

pub use processor::{PillScanner, ScanMode, ScanOutcome};
