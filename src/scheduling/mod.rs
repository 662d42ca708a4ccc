//! Availability and conflict-resolution engine
//!
//! Pure, synchronous core: wall-clock arithmetic, slot generation, closure
//! resolution, conflict detection, and the ordered booking ruling. Services
//! feed it snapshots read from the repository and act on the verdicts.

pub mod closures;
pub mod conflicts;
pub mod rules;
pub mod slots;
pub mod time;

pub use closures::DayAvailability;
pub use rules::{Candidate, Ruling};
pub use time::Interval;
