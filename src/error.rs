use thiserror::Error;

/// Reasons a search could not be started or advanced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or end cell has not been placed yet
    #[error("place both a start and an end cell before searching")]
    MissingEndpoints,
    /// `start` was called while a search is still running
    #[error("a search is already running")]
    AlreadyRunning,
    /// `step` was called outside the running phase
    #[error("no search is running")]
    NotRunning,
    /// Predecessor chain did not lead back to the start cell.
    ///
    /// This is an internal consistency fault and should be reported, never
    /// swallowed.
    #[error("predecessor chain broke after {hops} hops without reaching the start cell")]
    PathInconsistency { hops: usize },
}

impl SearchError {
    /// Whether the user can fix the condition and retry.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SearchError::PathInconsistency { .. })
    }
}
