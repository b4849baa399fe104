/// Fixed-capacity FIFO of bytes.
///
/// `count` decides full/empty; `head == tail` holds in both states.
/// `storage` is `None` once the buffer has been destroyed.
#[derive(Debug)]
pub struct RingBuffer {
    pub(super) storage: Option<Box<[u8]>>,
    pub(super) capacity: usize,
    pub(super) count: usize,
    pub(super) head: usize,
    pub(super) tail: usize,
}
