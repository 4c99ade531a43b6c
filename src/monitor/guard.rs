//! Single-slot run guard.
//!
//! Holds the explicit `Idle`/`Running` state of the monitor. A `CycleSlot` is
//! handed out to at most one cycle at a time and puts the state back to `Idle`
//! when dropped, so an aborted cycle releases the slot too.

use std::sync::Mutex;

use tokio::sync::{Mutex as AsyncMutex, MutexGuard};
use tokio::time::Instant;

/// What started a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOrigin {
    Scheduled,
    Manual,
}

impl std::fmt::Display for CycleOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleOrigin::Scheduled => f.write_str("scheduled"),
            CycleOrigin::Manual => f.write_str("manual"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Running {
        origin: CycleOrigin,
        started_at: Instant,
    },
}

#[derive(Debug)]
pub(crate) struct RunGuard {
    slot: AsyncMutex<()>,
    state: Mutex<CycleState>,
}

/// Proof that the holder owns the only running cycle.
pub(crate) struct CycleSlot<'a> {
    _slot: MutexGuard<'a, ()>,
    state: &'a Mutex<CycleState>,
}

impl RunGuard {
    pub(crate) fn new() -> Self {
        Self {
            slot: AsyncMutex::new(()),
            state: Mutex::new(CycleState::Idle),
        }
    }

    /// Takes the slot if no cycle is running.
    pub(crate) fn try_begin(&self, origin: CycleOrigin) -> Option<CycleSlot<'_>> {
        let slot = self.slot.try_lock().ok()?;
        Some(self.enter(slot, origin))
    }

    /// Waits for the running cycle, if any, then takes the slot.
    pub(crate) async fn begin(&self, origin: CycleOrigin) -> CycleSlot<'_> {
        let slot = self.slot.lock().await;
        self.enter(slot, origin)
    }

    pub(crate) fn state(&self) -> CycleState {
        *lock_state(&self.state)
    }

    fn enter<'a>(&'a self, slot: MutexGuard<'a, ()>, origin: CycleOrigin) -> CycleSlot<'a> {
        *lock_state(&self.state) = CycleState::Running {
            origin,
            started_at: Instant::now(),
        };
        CycleSlot {
            _slot: slot,
            state: &self.state,
        }
    }
}

impl Drop for CycleSlot<'_> {
    fn drop(&mut self) {
        *lock_state(self.state) = CycleState::Idle;
    }
}

// The state is a plain Copy value, so a poisoned lock still holds a usable one.
fn lock_state(state: &Mutex<CycleState>) -> std::sync::MutexGuard<'_, CycleState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
