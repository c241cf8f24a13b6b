use boldlink_client::{ApiObserver, OperationEvent, Outcome};

/// Observer that traces every API operation to stderr, keeping stdout
/// clean for command output.
pub struct StderrObserver;

impl ApiObserver for StderrObserver {
    fn observe(&self, event: OperationEvent<'_>) {
        let verdict = match event.outcome {
            Outcome::Success => "ok",
            Outcome::Failure => "failed",
        };

        match (event.status, event.detail) {
            (Some(status), Some(detail)) => eprintln!(
                "[api] {} {} -> {} (HTTP {}): {}",
                event.operation, event.target, verdict, status, detail
            ),
            (Some(status), None) => eprintln!(
                "[api] {} {} -> {} (HTTP {})",
                event.operation, event.target, verdict, status
            ),
            (None, Some(detail)) => eprintln!(
                "[api] {} {} -> {}: {}",
                event.operation, event.target, verdict, detail
            ),
            (None, None) => eprintln!("[api] {} {} -> {}", event.operation, event.target, verdict),
        }
    }
}
