use common::content::Collection;
use thiserror::Error;

/// The only failure a content read can produce.
///
/// Network errors, non-2xx answers, undecodable bodies and aborted requests all
/// end up here; callers never branch on the cause, it only feeds the log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch {collection}: {reason}")]
pub struct ContentFetchFailed {
    pub collection: Collection,
    pub reason: String,
}
