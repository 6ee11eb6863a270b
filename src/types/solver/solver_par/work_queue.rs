use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A tentative relaxation entry: the distance recorded at push time and the
/// vertex it belongs to. Ordered by `(dist, vertex)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct QueueEntry {
    pub dist: u64,
    pub vertex: usize,
}

/// One worker's priority queue.
///
/// A min-heap guarded by its own mutex, plus an approximate size counter
/// that can be read without the lock for cheap emptiness checks. The
/// counter is only ever modified while the lock is held, so it can lag a
/// concurrent reader but never the heap itself.
pub(crate) struct WorkQueue {
    heap: Mutex<BinaryHeap<Reverse<QueueEntry>>>,
    approx_size: AtomicUsize,
}

impl WorkQueue {
    pub(crate) fn new() -> Self {
        Self {
            heap: Mutex::new(BinaryHeap::new()),
            approx_size: AtomicUsize::new(0),
        }
    }

    /// Inserts an entry. Called by whichever worker committed the
    /// relaxation, not necessarily the queue's owner.
    pub(crate) fn push(&self, entry: QueueEntry) {
        let mut heap = self.heap.lock().unwrap();
        heap.push(Reverse(entry));
        self.approx_size.fetch_add(1, Ordering::Relaxed);
    }

    /// Owner pop: blocks on the queue's own mutex, which is only ever
    /// contended by short push and steal critical sections.
    pub(crate) fn pop_min(&self) -> Option<QueueEntry> {
        if self.approx_size.load(Ordering::Relaxed) == 0 {
            return None;
        }

        let mut heap = self.heap.lock().unwrap();
        self.pop_locked(&mut heap)
    }

    /// Steal pop: never waits on a busy owner. A held lock or an empty
    /// queue both read as "nothing to steal here".
    pub(crate) fn try_steal(&self) -> Option<QueueEntry> {
        if self.approx_size.load(Ordering::Relaxed) == 0 {
            return None;
        }

        let mut heap = self.heap.try_lock().ok()?;
        self.pop_locked(&mut heap)
    }

    fn pop_locked(&self, heap: &mut BinaryHeap<Reverse<QueueEntry>>) -> Option<QueueEntry> {
        match heap.pop() {
            Some(Reverse(entry)) => {
                self.approx_size.fetch_sub(1, Ordering::Relaxed);
                Some(entry)
            }
            None => {
                // The fast-path counter raced ahead of the heap; repair it.
                self.approx_size.store(0, Ordering::Relaxed);
                None
            }
        }
    }
}
