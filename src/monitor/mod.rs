//! Check cycles, the scheduler, and manual triggering.
//!
//! A cycle is: check every configured domain, render the report, send it to the
//! admin. Both the scheduler and the manual trigger run cycles through the same
//! `Monitor`, which allows only one cycle at a time.

mod cycle;
mod guard;
mod scheduler;
mod trigger;

pub use cycle::{CycleOutcome, Monitor, SkipReason};
pub use guard::{CycleOrigin, CycleState};
pub use scheduler::Scheduler;
pub use trigger::{ManualTriggerGate, TriggerOutcome};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
