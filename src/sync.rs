//! The sync cycle controller: one reconciliation pass per timer tick.

mod session;

pub use session::{CycleOutcome, Session};
