use thiserror::Error;

/// An item passed to [`TestBench::add_tests`] that is not a complete
/// `(description, procedure)` pair.
///
/// The items preceding the malformed one have already been registered
/// when this error is returned; the malformed item and the rest of the
/// batch have not.
///
/// [`TestBench::add_tests`]: crate::TestBench::add_tests
#[derive(Debug, Error)]
#[error("malformed test entry at position {index}: {reason}")]
pub struct MalformedEntryError {
    /// 0-based position of the offending item within the batch.
    pub index: usize,
    /// What was wrong with the item.
    pub reason: MalformedReason,
}

/// The reason a batch item could not be turned into a test entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedReason {
    #[allow(missing_docs)]
    #[error("missing description")]
    MissingDescription,

    #[allow(missing_docs)]
    #[error("missing procedure")]
    MissingProcedure,
}

impl MalformedReason {
    pub(crate) fn at(self, index: usize) -> MalformedEntryError {
        MalformedEntryError {
            index,
            reason: self,
        }
    }
}
