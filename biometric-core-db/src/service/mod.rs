pub mod clock;
pub mod scan_event_processor;

#[cfg(test)]
pub mod test_utils;

pub use clock::*;
pub use scan_event_processor::*;
