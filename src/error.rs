//! Error type shared by the containers and evaluation helpers.

use thiserror::Error;

/// Contract violations reported by the checked accessors and batch evaluation.
///
/// Expected edge conditions (empty maps, out-of-domain keys, non-positive
/// log-linear arguments, erasing absent keys) are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Positional access past the end of the node storage
    #[error("index {index} is out of range for map of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Observation and output slices of a batch evaluation differ in length
    #[error("length mismatch: {expected} observation points but {found} output slots")]
    LengthMismatch { expected: usize, found: usize },
}
