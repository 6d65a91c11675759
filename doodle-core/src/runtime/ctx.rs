use std::collections::VecDeque;

use crate::event::{Emitted, OutputEvent};

/// Output queue shared between the sequencer and whoever renders it.
#[derive(Debug, Default)]
pub struct Ctx {
    event_queue: VecDeque<Emitted>,
    emitted_total: usize,
}

impl Ctx {
    pub fn push(&mut self, at_ms: u64, event: OutputEvent) {
        log::trace!("emit @{}ms {:?}", at_ms, event);
        self.emitted_total += 1;
        self.event_queue.push_back(Emitted { at_ms, event });
    }
    pub fn pop(&mut self) -> Option<Emitted> {
        self.event_queue.pop_front()
    }
    pub fn drain(&mut self) -> Vec<Emitted> {
        self.event_queue.drain(..).collect()
    }
    pub fn is_empty(&self) -> bool {
        self.event_queue.is_empty()
    }
    /// Number of events ever pushed, drained or not.
    pub fn emitted_total(&self) -> usize {
        self.emitted_total
    }
}
