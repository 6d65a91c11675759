use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Entry<T> {
    task: T,
    interval: Option<u64>,
}

/// Timer queue on a virtual millisecond clock.
///
/// Timers due at the same instant fire in the order they were scheduled.
pub struct Scheduler<T> {
    now: u64,
    next_seq: u64,
    // (due, seq)
    queue: BinaryHeap<Reverse<(u64, u64)>>,
    entries: HashMap<u64, Entry<T>>,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
            entries: HashMap::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// One-shot timer, due `delay_ms` from now.
    pub fn after(&mut self, delay_ms: u64, task: T) -> TimerId {
        self.insert(self.now.saturating_add(delay_ms), task, None)
    }

    /// Repeating timer, first due one interval from now. Zero is clamped to 1ms.
    pub fn every(&mut self, interval_ms: u64, task: T) -> TimerId {
        let interval = interval_ms.max(1);
        self.insert(self.now.saturating_add(interval), task, Some(interval))
    }

    fn insert(&mut self, due: u64, task: T, interval: Option<u64>) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((due, seq)));
        self.entries.insert(seq, Entry { task, interval });
        TimerId(seq)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        if self.entries.remove(&id.0).is_none() {
            return false;
        }
        self.queue.retain(|Reverse((_, seq))| *seq != id.0);
        true
    }

    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse((due, _))| *due)
    }

    /// Pops the earliest timer due at or before `until` and moves the clock
    /// to its due time. Repeating timers are re-queued one interval later.
    pub fn pop_due(&mut self, until: u64) -> Option<(u64, T)> {
        let Reverse((due, seq)) = *self.queue.peek()?;
        if due > until {
            return None;
        }
        self.queue.pop();
        self.now = self.now.max(due);

        let entry = self.entries.get(&seq)?;
        let task = entry.task.clone();
        let interval = entry.interval;

        match interval {
            Some(step) => self.queue.push(Reverse((due.saturating_add(step), seq))),
            None => {
                self.entries.remove(&seq);
            }
        }
        Some((due, task))
    }

    pub fn advance_to(&mut self, t: u64) {
        self.now = self.now.max(t);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
