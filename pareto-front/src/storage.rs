#[cfg(test)]
#[path = "../tests/unit/storage_test.rs"]
mod storage_test;

/// Initial backing capacity of [`Storage`].
const DEFAULT_CAPACITY: usize = 16;

/// An insertion ordered, growable array with explicit capacity doubling and
/// in-place shift-left compaction.
///
/// The backing capacity only ever grows: a sweep shrinks the logical length,
/// never the allocation. Appends are O(1) amortized, a sweep costs one move
/// per surviving element placed after the first removal.
pub(crate) struct Storage<T> {
    items: Vec<T>,
}

impl<T> Storage<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::with_capacity(DEFAULT_CAPACITY) }
    }

    /// Appends an item, doubling the backing capacity when it is full.
    pub(crate) fn push(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            self.items.reserve_exact(self.items.capacity());
        }

        self.items.push(item);
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Drops all items keeping the backing capacity.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Sweeps the sequence left to right, compacting all items for which `keep`
    /// returns `true` to the front while preserving their relative order.
    ///
    /// `evicted` observes every removed item together with the index it had in
    /// the sequence before the sweep started, in ascending index order.
    pub(crate) fn sweep(&mut self, mut keep: impl FnMut(&T) -> bool, mut evicted: impl FnMut(usize, &T)) {
        let mut write = 0;
        for read in 0..self.items.len() {
            if keep(&self.items[read]) {
                if write != read {
                    self.items.swap(write, read);
                }
                write += 1;
            } else {
                evicted(read, &self.items[read]);
            }
        }

        self.items.truncate(write);
    }
}
