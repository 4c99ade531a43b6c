//! Graceful shutdown handling.

use std::future::{poll_fn, Future};
use std::pin::Pin;
use std::task::Poll;

use log::warn;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;

/// A spawned long-running task and the name it is logged under.
pub struct BackgroundTask {
    pub name: &'static str,
    pub handle: JoinHandle<()>,
}

impl BackgroundTask {
    pub fn new(name: &'static str, handle: JoinHandle<()>) -> Self {
        Self { name, handle }
    }
}

/// Why `wait_for_shutdown` returned.
#[derive(Debug)]
pub enum ShutdownCause {
    /// Ctrl-C or SIGTERM was received.
    Signal,
    /// A background task stopped before shutdown was requested.
    TaskExited {
        name: &'static str,
        result: Result<(), JoinError>,
    },
}

/// Waits for a shutdown signal or for the first background task to stop on its own.
///
/// # Arguments
///
/// * `tasks` - Running tasks; a task that exited is removed from the list
///
/// # Returns
///
/// `ShutdownCause::Signal` on Ctrl-C/SIGTERM, otherwise the exited task's name
/// and join result.
pub async fn wait_for_shutdown(tasks: &mut Vec<BackgroundTask>) -> ShutdownCause {
    wait_for_shutdown_or(tasks, shutdown_signal()).await
}

async fn wait_for_shutdown_or(
    tasks: &mut Vec<BackgroundTask>,
    signal: impl Future<Output = ()>,
) -> ShutdownCause {
    let exited = tokio::select! {
        _ = signal => None,
        exited = first_exited(tasks) => Some(exited),
    };
    match exited {
        None => ShutdownCause::Signal,
        Some((index, result)) => ShutdownCause::TaskExited {
            name: tasks.remove(index).name,
            result,
        },
    }
}

// Resolves with the index of the first finished task. Never resolves for an empty list.
async fn first_exited(tasks: &mut [BackgroundTask]) -> (usize, Result<(), JoinError>) {
    poll_fn(|cx| {
        for (index, task) in tasks.iter_mut().enumerate() {
            if let Poll::Ready(result) = Pin::new(&mut task.handle).poll(cx) {
                return Poll::Ready((index, result));
            }
        }
        Poll::Pending
    })
    .await
}

/// Shuts down all background tasks gracefully.
///
/// Cancels the shared token, then waits for every task to observe it. Tasks only
/// block on bounded HTTP calls, so this returns promptly.
pub async fn shutdown_gracefully(cancel: CancellationToken, tasks: Vec<BackgroundTask>) {
    cancel.cancel();
    for task in tasks {
        if let Err(e) = task.handle.await {
            warn!("Background task '{}' ended abnormally: {}", task.name, e);
        }
    }
}

/// Resolves when the process receives Ctrl-C (or SIGTERM on Unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
