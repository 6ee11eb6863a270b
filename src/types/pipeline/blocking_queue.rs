use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// An unbounded FIFO hand-off queue.
///
/// `push` never waits; `pop` blocks while the queue is empty. One condition
/// variable per queue is enough because every push notifies it. There is no
/// capacity cap: the caller bounds the total item count up front.
pub struct BlockingQueue<T> {
    items: Mutex<VecDeque<T>>,
    available: Condvar,
}

impl<T> BlockingQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
        }
    }

    pub fn push(&self, value: T) {
        {
            let mut items = self.items.lock().unwrap();
            items.push_back(value);
        }
        self.available.notify_one();
    }

    pub fn pop(&self) -> T {
        let guard = self.items.lock().unwrap();
        let mut items = self
            .available
            .wait_while(guard, |items| items.is_empty())
            .unwrap();

        items.pop_front().expect("queue is non-empty after wait")
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
