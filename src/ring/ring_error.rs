use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Invalid capacity {capacity}: {reason}")]
    InvalidCapacity {
        capacity: usize,
        reason: &'static str,
    },
    #[error("Peek offset {offset} out of range: buffer holds {count} bytes")]
    OffsetOutOfRange { offset: usize, count: usize },
    #[error("Failed to allocate {capacity} bytes of ring storage")]
    AllocationFailure { capacity: usize },
    #[error("Ring buffer handle is not valid (destroyed)")]
    NullReference,
    #[error("Ring buffer full: all {capacity} slots in use")]
    BufferFull { capacity: usize },
    #[error("Ring buffer empty")]
    BufferEmpty,
}

impl RingError {
    /// Caller-supplied parameter violated a precondition.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity { .. } | Self::OffsetOutOfRange { .. }
        )
    }

    /// Full/empty are expected states the caller handles (drop, back off, retry later).
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::BufferFull { .. } | Self::BufferEmpty)
    }
}
