// src/core/scanner.rs

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::core::classifier::classify;
use crate::core::models::{ScanError, ScanSubject, SubjectKind, Verdict};
use crate::core::task::DelayedTask;

/// Result of one simulated scan, tagged with the ticket of the submission
/// that started it so stale results can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub kind: SubjectKind,
    pub ticket: u64,
    pub result: Result<Verdict, ScanError>,
}

/// Starts a simulated scan: waits for the artificial `delay`, classifies the
/// subject and sends the outcome on `tx`.
///
/// The delay has no meaning beyond making the demo feel like a network call.
pub fn spawn_scan(
    subject: ScanSubject,
    ticket: u64,
    delay: Duration,
    tx: mpsc::Sender<ScanOutcome>,
) -> DelayedTask {
    let kind = subject.kind();
    info!(%kind, ticket, delay_ms = delay.as_millis() as u64, "Starting simulated scan.");

    DelayedTask::spawn(delay, async move {
        let result = classify(&subject);
        match &result {
            Ok(verdict) => info!(%kind, ticket, severity = %verdict.severity, code = %verdict.code, "Scan resolved."),
            Err(e) => warn!(%kind, ticket, error = %e, "Scan rejected after delay."),
        }
        if tx.send(ScanOutcome { kind, ticket, result }).await.is_err() {
            warn!(ticket, "Scan result dropped, receiver closed.");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Severity;

    #[tokio::test(start_paused = true)]
    async fn outcome_arrives_after_the_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let _task = spawn_scan(ScanSubject::url("free-money.biz"), 3, Duration::from_millis(1500), tx);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.ticket, 3);
        assert_eq!(outcome.kind, SubjectKind::Url);
        assert_eq!(outcome.result.unwrap().severity, Severity::Danger);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_scan_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(4);
        let task = spawn_scan(ScanSubject::file("a.txt", "text/plain", 1), 1, Duration::from_secs(2), tx);
        task.cancel();

        tokio::time::sleep(Duration::from_secs(3)).await;
        // The aborted task dropped its sender.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn zero_delay_scan_resolves() {
        let (tx, mut rx) = mpsc::channel(1);
        let _task = spawn_scan(ScanSubject::image("cat.png", "image/png", 100), 9, Duration::ZERO, tx);
        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.result.unwrap().severity, Severity::Clean);
    }
}
