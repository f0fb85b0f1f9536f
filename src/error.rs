//! Failure modes of a distance computation.
//!
//! The algorithm itself cannot fail; only sizing and allocating its scratch
//! space can. The `try_*` entry points surface these as [`EditError`], the
//! plain entry points treat them as fatal.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    /// Buffer or matrix dimensions overflow `usize`.
    #[error("capacity overflow sizing a {rows}x{cols} edit table")]
    CapacityOverflow { rows: usize, cols: usize },

    /// The largest cost reachable for these lengths does not fit the cost type.
    #[error("edit cost overflows the cost type for sequences of length {source_len} and {target_len}")]
    CostOverflow { source_len: usize, target_len: usize },

    /// Growing the row buffer or the full matrix failed.
    #[error("failed to allocate {requested} cost cells")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
