use crate::ring::{RingBuffer, RingError};

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    pub capacity: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RingConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn validate(&self) -> Result<(), RingError> {
        if self.capacity == 0 {
            return Err(RingError::InvalidCapacity {
                capacity: self.capacity,
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    pub fn build(&self) -> Result<RingBuffer, RingError> {
        self.validate()?;
        RingBuffer::new(self.capacity)
    }
}
