/// Outcome of one API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// One structured observability event: operation name, target, outcome.
#[derive(Debug)]
pub struct OperationEvent<'a> {
    pub operation: &'static str,
    pub target: &'a str,
    pub outcome: Outcome,
    pub status: Option<u16>,
    pub detail: Option<&'a str>,
}

/// Injected collaborator notified about every API operation.
///
/// Keeps tracing out of the request/response logic itself; the default
/// implementation discards everything.
pub trait ApiObserver: Send + Sync {
    fn observe(&self, event: OperationEvent<'_>);
}

/// Observer that discards all events
pub struct NoopObserver;

impl ApiObserver for NoopObserver {
    fn observe(&self, _event: OperationEvent<'_>) {}
}
