/// Growth step, in elements, for list-valued attribute storage.
pub const GROW_CHUNK: usize = 8192;

/// Append-only contiguous store of one scalar type.
///
/// Capacity grows by exactly [`GROW_CHUNK`] elements whenever it runs out,
/// never geometrically. [`reset_count`](Self::reset_count) keeps the
/// allocation, so one buffer serves every element of an import run.
#[derive(Debug, Clone, Default)]
pub struct GrowBuffer<T> {
    data: Vec<T>,
}

impl<T: Copy> GrowBuffer<T> {
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a buffer with one chunk already allocated.
    #[inline]
    pub fn with_chunk() -> Self {
        Self { data: Vec::with_capacity(GROW_CHUNK) }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve_exact(GROW_CHUNK);
        }
        self.data.push(value);
    }

    /// Logical truncation. Capacity is kept.
    #[inline]
    pub fn reset_count(&mut self) {
        self.data.clear();
    }

    /// Frees the backing storage.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}
