use std::fmt;

/// Terminal status reported by an executor when a waited operation settles.
///
/// The scheduler never inspects computation results, only these codes. `Ok`
/// counts toward throughput; `NotStarted` marks a request slot that was never
/// submitted; everything else is a backend failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// The operation ran to completion.
    Ok,
    /// The request was never submitted, so there is nothing to wait on.
    NotStarted,
    /// Unspecified backend failure.
    GeneralError,
    /// The backend accepted the submission but could not produce a result.
    NotReady,
    /// The request was already executing when it was touched again.
    RequestBusy,
    /// The backend reached a state it cannot explain.
    Unexpected,
    /// The backend gave up on the operation after its own internal deadline.
    Timeout,
}

impl StatusCode {
    /// Whether this status counts as a successful completion.
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }

    /// Whether this status marks a request that was never submitted.
    pub fn is_not_started(&self) -> bool {
        matches!(self, StatusCode::NotStarted)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::Ok => "OK",
            StatusCode::NotStarted => "NOT_STARTED",
            StatusCode::GeneralError => "GENERAL_ERROR",
            StatusCode::NotReady => "NOT_READY",
            StatusCode::RequestBusy => "REQUEST_BUSY",
            StatusCode::Unexpected => "UNEXPECTED",
            StatusCode::Timeout => "TIMEOUT",
        };
        write!(f, "{}", name)
    }
}
