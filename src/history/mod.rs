//! Bounded replay buffer of recent chat lines.
//!
//! Only rendered chat lines are stored; greetings and error replies never
//! enter the buffer. The buffer is an instance field of [`Hub`], so every
//! server instance has its own history.
//!
//! [`Hub`]: crate::state::Hub

use std::collections::VecDeque;
use std::sync::Arc;

pub use crate::config::HistoryConfig;

/// FIFO of the most recent chat lines, oldest first.
#[derive(Debug)]
pub struct HistoryBuffer {
    lines: VecDeque<Arc<str>>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer holding at most `capacity` lines.
    ///
    /// A zero capacity is raised to one; config validation rejects it earlier.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Append at the tail, evicting from the head once full.
    pub fn append(&mut self, line: Arc<str>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Current contents in insertion order.
    pub fn snapshot(&self) -> Vec<Arc<str>> {
        self.lines.iter().cloned().collect()
    }

    #[allow(dead_code)] // Used by tests
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)] // Used by tests
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::from_config(&HistoryConfig::default())
    }
}
