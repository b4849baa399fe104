use super::RingError;
use crate::ring::RingBuffer;
use tracing::{debug, trace, warn};

impl RingBuffer {
    /// Allocates `capacity` bytes of storage and returns an empty buffer.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must be greater than zero",
            });
        }

        let mut storage = Vec::new();
        if storage.try_reserve_exact(capacity).is_err() {
            warn!(capacity, "ring storage allocation failed");
            return Err(RingError::AllocationFailure { capacity });
        }
        storage.resize(capacity, 0u8);

        debug!(capacity, "ring buffer initialized");

        Ok(Self {
            storage: Some(storage.into_boxed_slice()),
            capacity,
            count: 0,
            head: 0,
            tail: 0,
        })
    }

    #[inline(always)]
    fn storage(&self) -> Result<&[u8], RingError> {
        self.storage.as_deref().ok_or(RingError::NullReference)
    }

    #[inline(always)]
    fn storage_mut(&mut self) -> Result<&mut [u8], RingError> {
        self.storage.as_deref_mut().ok_or(RingError::NullReference)
    }

    #[inline(always)]
    fn advance(&self, idx: usize) -> usize {
        let next = idx + 1;
        if next == self.capacity { 0 } else { next }
    }

    /// Appends `item` at `head`. A full buffer rejects the write and is left untouched.
    #[inline]
    pub fn insert(&mut self, item: u8) -> Result<(), RingError> {
        if self.is_full()? {
            trace!(capacity = self.capacity, "insert rejected, buffer full");
            return Err(RingError::BufferFull {
                capacity: self.capacity,
            });
        }

        let head = self.head;
        self.storage_mut()?[head] = item;
        self.head = self.advance(head);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the oldest byte.
    #[inline]
    pub fn remove(&mut self) -> Result<u8, RingError> {
        if self.is_empty()? {
            trace!("remove rejected, buffer empty");
            return Err(RingError::BufferEmpty);
        }

        let tail = self.tail;
        let item = self.storage()?[tail];
        self.tail = self.advance(tail);
        self.count -= 1;
        Ok(item)
    }

    /// Returns the byte `offset` places behind the next one `remove` would yield.
    #[inline]
    pub fn peek(&self, offset: usize) -> Result<u8, RingError> {
        let storage = self.storage()?;

        if self.count == 0 {
            return Err(RingError::BufferEmpty);
        }
        if offset >= self.count {
            return Err(RingError::OffsetOutOfRange {
                offset,
                count: self.count,
            });
        }

        // tail < capacity and offset < count <= capacity
        Ok(storage[(self.tail + offset) % self.capacity])
    }

    #[inline(always)]
    pub fn is_full(&self) -> Result<bool, RingError> {
        self.storage()?;
        Ok(self.count == self.capacity)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> Result<bool, RingError> {
        self.storage()?;
        Ok(self.count == 0)
    }

    #[inline(always)]
    pub fn len(&self) -> Result<usize, RingError> {
        self.storage()?;
        Ok(self.count)
    }

    #[inline(always)]
    pub fn available(&self) -> Result<usize, RingError> {
        self.storage()?;
        Ok(self.capacity - self.count)
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.storage.is_some()
    }

    /// Releases the storage. Every later call on this buffer, including a
    /// second `destroy`, fails with [`RingError::NullReference`].
    pub fn destroy(&mut self) -> Result<(), RingError> {
        let storage = self.storage.take().ok_or(RingError::NullReference)?;
        drop(storage);

        self.count = 0;
        self.head = 0;
        self.tail = 0;

        debug!(capacity = self.capacity, "ring buffer destroyed");
        Ok(())
    }
}
