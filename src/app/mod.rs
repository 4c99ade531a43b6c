//! Process-level helpers for the service binary.

mod shutdown;

pub use shutdown::{shutdown_gracefully, wait_for_shutdown, BackgroundTask, ShutdownCause};
