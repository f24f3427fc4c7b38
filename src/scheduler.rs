// scheduler.rs — Logical-clock timer queue
//
// Stands in for the host's setTimeout: work is queued as plain data with a
// fire time in logical ticks and handed back to the driver as it comes
// due.  Tasks that share a fire time run in the order they were queued,
// so a zero-delay task never overtakes an earlier one.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use slotmap::{new_key_type, SlotMap};





/// Logical time, in ticks (one tick ≈ one millisecond of host time).
pub type Tick = u64;

new_key_type! {
    /// Handle for a queued task; used to cancel it.  Stale handles (fired
    /// or cancelled) are simply not found.
    pub struct TimerId;
}





#[derive(Debug)]
struct TimerData<T> {
    fire_time: Tick,
    task:      T,
}

/// An entry in the timer queue (min-heap by fire time, then sequence).
/// Entries whose timer is gone from the map were cancelled.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    fire_time: Tick,
    seq:       u64,
    id:        TimerId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.fire_time.cmp(&self.fire_time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}





////////////////////////////////////////////////////////////////////////////////

pub struct Scheduler<T> {
    now:      Tick,
    next_seq: u64,
    timers:   SlotMap<TimerId, TimerData<T>>,
    queue:    BinaryHeap<QueueEntry>,
}





impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Scheduler
//
////////////////////////////////////////////////////////////////////////////////

impl<T> Scheduler<T> {

    pub fn new() -> Self {
        Scheduler {
            now:      0,
            next_seq: 0,
            timers:   SlotMap::with_key(),
            queue:    BinaryHeap::new(),
        }
    }





    /// Current logical time.
    pub fn now(&self) -> Tick {
        self.now
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  schedule
    //
    //  Queue a task to fire `delay` ticks from now.  A zero delay still
    //  defers the task to the next dispatch, never runs it inline.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn schedule(&mut self, delay: Tick, task: T) -> TimerId {
        let fire_time = self.now.saturating_add (delay);
        let id        = self.timers.insert (TimerData { fire_time, task });
        let seq       = self.next_seq;
        self.next_seq += 1;

        self.queue.push (QueueEntry { fire_time, seq, id });

        tracing::trace!(target: "material_icons_ext::scheduler", ?id, delay, "task scheduled");
        id
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  cancel
    //
    //  Cancel a pending task.  Returns false if it already fired, was
    //  already cancelled, or was never issued by this scheduler.  The heap
    //  entry stays behind and is dropped when it reaches the top.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove (id).is_some()
    }





    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key (id)
    }

    /// Number of live (not cancelled) tasks.
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  next_due
    //
    //  Pop the earliest live task firing at or before `deadline`, moving the
    //  clock to its fire time.  Returns None (clock untouched) when nothing
    //  is due.  Tasks scheduled by the caller while draining are picked up
    //  by later calls in fire-time order.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn next_due(&mut self, deadline: Tick) -> Option<T> {
        loop {
            let entry = *self.queue.peek()?;

            if entry.fire_time > deadline {
                return None;
            }

            self.queue.pop();

            let Some (timer) = self.timers.remove (entry.id) else {
                continue;
            };

            self.now = self.now.max (timer.fire_time);
            return Some (timer.task);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  advance_to
    //
    //  Move the clock forward once every task due by `deadline` has been
    //  drained.  Never moves the clock backwards.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn advance_to(&mut self, deadline: Tick) {
        self.now = self.now.max (deadline);
    }
}
