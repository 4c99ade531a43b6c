//! Shared test doubles for the monitoring pipeline.
//!
//! `ScriptedResolver` answers from a fixed table (with optional per-domain
//! latency) and records every call; `RecordingNotifier` records every delivery
//! and can be told to fail. `LogCapture` collects the log records emitted on
//! the current thread while it is alive.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error_handling::NotifyError;
use crate::notify::{ChatId, Notifier};
use crate::status::{Domain, DomainStatus, StatusResolver};

#[derive(Default)]
pub struct ScriptedResolver {
    answers: HashMap<String, (DomainStatus, Duration)>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, domain: &str, status: DomainStatus) -> Self {
        self.answers
            .insert(domain.to_string(), (status, Duration::ZERO));
        self
    }

    pub fn with_delay(mut self, domain: &str, status: DomainStatus, delay: Duration) -> Self {
        self.answers.insert(domain.to_string(), (status, delay));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusResolver for ScriptedResolver {
    async fn resolve(&self, domain: &Domain) -> DomainStatus {
        self.calls.lock().unwrap().push(domain.as_str().to_string());
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let (status, delay) = self
            .answers
            .get(domain.as_str())
            .copied()
            .unwrap_or((DomainStatus::Error, Duration::ZERO));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        status
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(ChatId, String)>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Every attempted delivery, including failed ones.
    pub fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, recipient: &ChatId) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(to, _)| to == recipient)
            .map(|(_, text)| text)
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, recipient: &ChatId, text: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.clone(), text.to_string()));
        if self.failing {
            Err(NotifyError::Rejected("recording notifier set to fail".into()))
        } else {
            Ok(())
        }
    }
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(Level, String)>>> = const { RefCell::new(None) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let message = record.args().to_string();
        CAPTURED.with(|captured| {
            if let Some(records) = captured.borrow_mut().as_mut() {
                records.push((record.level(), message));
            }
        });
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INSTALL_CAPTURE: Once = Once::new();

/// Installs the capturing logger as the process-wide logger.
///
/// Test binaries never install `env_logger`, so this always wins the global slot.
pub fn install_log_capture() {
    INSTALL_CAPTURE.call_once(|| {
        if log::set_logger(&CAPTURE_LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Records log output of the current thread until dropped.
///
/// `#[tokio::test]` runs on a current-thread runtime, so everything the test
/// awaits logs on the test's own thread.
pub struct LogCapture {
    _private: (),
}

impl LogCapture {
    pub fn start() -> Self {
        install_log_capture();
        CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
        Self { _private: () }
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        CAPTURED.with(|captured| captured.borrow().clone().unwrap_or_default())
    }

    pub fn count(&self, level: Level) -> usize {
        self.records()
            .iter()
            .filter(|(recorded, _)| *recorded == level)
            .count()
    }
}

impl Drop for LogCapture {
    fn drop(&mut self) {
        CAPTURED.with(|captured| *captured.borrow_mut() = None);
    }
}
