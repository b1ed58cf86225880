//! Fixed-capacity FIFO of job references.
//!
//! # Invariants
//! - `len() <= capacity()` at all times; `push` refuses rather than
//!   overwriting unread entries.
//! - `busy_ticks + idle_ticks` equals the number of ticks the driving
//!   component has accounted against this queue.

use crate::QueueError;
use procsim_types::JobId;
use std::collections::VecDeque;

/// Capacity-checked FIFO with busy/idle tick counters.
///
/// The queue holds `JobId`s, never the records themselves, so moving a job
/// between queues is a pop from one and a push onto the other.
#[derive(Debug, Clone)]
pub struct BoundedQueue {
    entries: VecDeque<JobId>,
    capacity: usize,
    busy_ticks: u64,
    idle_ticks: u64,
}

impl BoundedQueue {
    /// Create an empty queue holding at most `capacity` jobs.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            busy_ticks: 0,
            idle_ticks: 0,
        }
    }

    /// Append a job at the tail.
    pub fn push(&mut self, job: JobId) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.entries.push_back(job);
        Ok(())
    }

    /// Remove and return the head, or `None` if empty.
    pub fn pop(&mut self) -> Option<JobId> {
        self.entries.pop_front()
    }

    /// The head, without removing it.
    pub fn peek_head(&self) -> Option<JobId> {
        self.entries.front().copied()
    }

    /// Number of queued jobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether another push would fail.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Configured bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `job` is queued.
    pub fn contains(&self, job: JobId) -> bool {
        self.entries.contains(&job)
    }

    /// Queued jobs, head first.
    pub fn iter(&self) -> impl Iterator<Item = JobId> + '_ {
        self.entries.iter().copied()
    }

    /// Count a tick in which the head made progress.
    pub fn record_busy(&mut self) {
        self.busy_ticks += 1;
    }

    /// Count a tick in which the head made no progress, or there was no head.
    pub fn record_idle(&mut self) {
        self.idle_ticks += 1;
    }

    /// Ticks counted busy.
    pub fn busy_ticks(&self) -> u64 {
        self.busy_ticks
    }

    /// Ticks counted idle.
    pub fn idle_ticks(&self) -> u64 {
        self.idle_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = BoundedQueue::new(4);
        queue.push(JobId(0)).unwrap();
        queue.push(JobId(1)).unwrap();
        queue.push(JobId(2)).unwrap();

        assert_eq!(queue.peek_head(), Some(JobId(0)));
        assert_eq!(queue.pop(), Some(JobId(0)));
        assert_eq!(queue.pop(), Some(JobId(1)));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![JobId(2)]);
    }

    #[test]
    fn test_pop_empty() {
        let mut queue = BoundedQueue::new(2);
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek_head(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_push_past_capacity_fails() {
        let mut queue = BoundedQueue::new(2);
        queue.push(JobId(0)).unwrap();
        queue.push(JobId(1)).unwrap();
        assert!(queue.is_full());

        assert_eq!(
            queue.push(JobId(2)),
            Err(QueueError::CapacityExceeded { capacity: 2 })
        );
        // Existing entries are untouched.
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![JobId(0), JobId(1)]);
    }

    #[test]
    fn test_requeue_at_capacity() {
        let mut queue = BoundedQueue::new(2);
        queue.push(JobId(0)).unwrap();
        queue.push(JobId(1)).unwrap();

        let head = queue.pop().unwrap();
        queue.push(head).unwrap();
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![JobId(1), JobId(0)]);
    }

    #[test]
    fn test_tick_counters() {
        let mut queue = BoundedQueue::new(1);
        queue.record_busy();
        queue.record_busy();
        queue.record_idle();
        assert_eq!(queue.busy_ticks(), 2);
        assert_eq!(queue.idle_ticks(), 1);
    }
}
