use thiserror::Error;

/// Errors surfaced synchronously to callers of `dispatch`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `dispatch` was called while another dispatch on the same store was
    /// still reducing or notifying subscribers. The action was not applied.
    #[error("Reentrant dispatch of '{action}' rejected: store is already dispatching")]
    ReentrantDispatch { action: &'static str },

    /// An action could not be decoded: missing `type` tag or bad payload.
    #[error("Malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),
}
