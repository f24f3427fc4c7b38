// rate_shaper.rs — Rush-then-throttle row processing policy
//
// The first `rush_batch` rows of a burst are processed synchronously and
// again shortly after (their contents often attach a moment after the row
// itself).  Past that, rows get a single zero-delay deferred run so a
// large listing does not block rendering.  A quiet period with no
// throttled rows resets the count and the next burst is rushed again.

use crate::scheduler::{Scheduler, Tick, TimerId};





pub const DEFAULT_RUSH_BATCH: u32 = 90;

/// Delay of the follow-up run for a rushed row.
pub const FOLLOW_UP_DELAY:   Tick = 20;

/// Delay of the single run for a throttled row.
pub const DEFERRED_DELAY:    Tick = 0;

/// Rows must stop arriving this long before the counter resets.
pub const QUIET_PERIOD:      Tick = 1000;





////////////////////////////////////////////////////////////////////////////////

/// Work the rate shaper queues on the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTask<R> {
    /// Run icon replacement for the row.
    Replace(R),

    /// The quiet period elapsed.
    ResetCounter,
}





/// How an observed row was admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Caller runs the row now; a follow-up run has been queued.
    Rushed,

    /// A single deferred run has been queued; caller does nothing now.
    Throttled,
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct RateShaper {
    rush_batch:             u32,
    executions_since_reset: u32,
    reset_timer:            Option<TimerId>,
}





impl Default for RateShaper {
    fn default() -> Self {
        Self::new (DEFAULT_RUSH_BATCH)
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl RateShaper
//
////////////////////////////////////////////////////////////////////////////////

impl RateShaper {

    pub fn new(rush_batch: u32) -> Self {
        RateShaper {
            rush_batch,
            executions_since_reset: 0,
            reset_timer:            None,
        }
    }





    pub fn rush_batch(&self) -> u32 {
        self.rush_batch
    }

    pub fn set_rush_batch(&mut self, rush_batch: u32) {
        self.rush_batch = rush_batch;
    }

    pub fn executions_since_reset(&self) -> u32 {
        self.executions_since_reset
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  observe
    //
    //  Admit one newly observed row.  Rows 1..=rush_batch since the last
    //  reset are Rushed; later rows are Throttled and push the quiet-period
    //  reset out by canceling any pending one.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn observe<R>(&mut self, row: R, scheduler: &mut Scheduler<RowTask<R>>) -> Admission {
        self.executions_since_reset = self.executions_since_reset.saturating_add (1);

        if self.executions_since_reset <= self.rush_batch {
            scheduler.schedule (FOLLOW_UP_DELAY, RowTask::Replace (row));
            return Admission::Rushed;
        }

        if self.executions_since_reset == self.rush_batch.saturating_add (1) {
            tracing::debug!(
                target: "material_icons_ext::rate_shaper",
                rush_batch = self.rush_batch,
                "rush batch exhausted, deferring rows"
            );
        }

        scheduler.schedule (DEFERRED_DELAY, RowTask::Replace (row));

        if let Some (timer) = self.reset_timer.take() {
            scheduler.cancel (timer);
        }

        self.reset_timer = Some (scheduler.schedule (QUIET_PERIOD, RowTask::ResetCounter));
        Admission::Throttled
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  on_quiet_period
    //
    //  Called by the driver when a RowTask::ResetCounter fires.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn on_quiet_period(&mut self) {
        tracing::debug!(
            target: "material_icons_ext::rate_shaper",
            executions = self.executions_since_reset,
            "quiet period elapsed, rushing again"
        );

        self.executions_since_reset = 0;
        self.reset_timer            = None;
    }
}





#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal driver: counts replacement runs per row.
    struct Harness {
        shaper:    RateShaper,
        scheduler: Scheduler<RowTask<u32>>,
        runs:      HashMap<u32, u32>,
    }

    impl Harness {
        fn new(rush_batch: u32) -> Self {
            Harness { shaper: RateShaper::new(rush_batch), scheduler: Scheduler::new(), runs: HashMap::new() }
        }

        fn observe(&mut self, row: u32) -> Admission {
            let admission = self.shaper.observe(row, &mut self.scheduler);
            if admission == Admission::Rushed {
                *self.runs.entry(row).or_default() += 1;
            }
            admission
        }

        fn advance(&mut self, ticks: Tick) {
            let deadline = self.scheduler.now() + ticks;
            while let Some(task) = self.scheduler.next_due(deadline) {
                match task {
                    RowTask::Replace(row) => *self.runs.entry(row).or_default() += 1,
                    RowTask::ResetCounter => self.shaper.on_quiet_period(),
                }
            }
            self.scheduler.advance_to(deadline);
        }

        fn runs(&self, row: u32) -> u32 {
            self.runs.get(&row).copied().unwrap_or(0)
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  first_rush_batch_rows_run_twice
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn first_rush_batch_rows_run_twice() {
        let mut h = Harness::new(90);

        for row in 1..=100 {
            let admission = h.observe(row);
            let expected = if row <= 90 { Admission::Rushed } else { Admission::Throttled };
            assert_eq!(admission, expected, "row {}", row);
        }

        // Rushed rows have run once synchronously; nothing deferred has run.
        assert_eq!(h.runs(1), 1);
        assert_eq!(h.runs(90), 1);
        assert_eq!(h.runs(91), 0);

        h.advance(FOLLOW_UP_DELAY);

        for row in 1..=90 {
            assert_eq!(h.runs(row), 2, "row {}", row);
        }
        for row in 91..=100 {
            assert_eq!(h.runs(row), 1, "row {}", row);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  deferred_rows_wait_for_next_turn
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn deferred_rows_wait_for_next_turn() {
        let mut h = Harness::new(1);
        h.observe(1);
        h.observe(2);

        assert_eq!(h.runs(2), 0);
        h.advance(0);
        assert_eq!(h.runs(2), 1);
        assert_eq!(h.runs(1), 1);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  quiet_period_resets_counter
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn quiet_period_resets_counter() {
        let mut h = Harness::new(90);
        for row in 1..=95 {
            h.observe(row);
        }
        assert_eq!(h.shaper.executions_since_reset(), 95);

        h.advance(QUIET_PERIOD - 1);
        assert_eq!(h.shaper.executions_since_reset(), 95);

        h.advance(1);
        assert_eq!(h.shaper.executions_since_reset(), 0);

        assert_eq!(h.observe(200), Admission::Rushed);
        h.advance(FOLLOW_UP_DELAY);
        assert_eq!(h.runs(200), 2);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  new_rows_push_the_reset_out
    //
    //  Each throttled row supersedes the pending quiet-period timer.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn new_rows_push_the_reset_out() {
        let mut h = Harness::new(2);
        h.observe(1);
        h.observe(2);
        h.observe(3);

        h.advance(600);
        h.observe(4);
        h.advance(600);

        // 1200 ticks after row 3, but only 600 after row 4.
        assert_eq!(h.shaper.executions_since_reset(), 4);

        h.advance(400);
        assert_eq!(h.shaper.executions_since_reset(), 0);

        // Only one reset timer is ever live.
        assert_eq!(h.scheduler.pending_count(), 0);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  rushed_rows_never_arm_the_reset
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn rushed_rows_never_arm_the_reset() {
        let mut h = Harness::new(90);
        for row in 1..=10 {
            h.observe(row);
        }
        h.advance(5000);

        assert_eq!(h.shaper.executions_since_reset(), 10);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  large_bursts_keep_one_live_reset
    //
    //  Superseding the reset timer is a map removal, so a long listing
    //  stays linear and never leaves more than one live reset behind.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn large_bursts_keep_one_live_reset() {
        const ROWS: u32 = 200_000;

        let mut h = Harness::new(90);
        for row in 1..=ROWS {
            h.observe(row);
        }

        // 90 follow-ups, one deferred run per later row, one reset.
        assert_eq!(h.scheduler.pending_count(), ROWS as usize + 1);

        h.advance(QUIET_PERIOD);
        assert_eq!(h.scheduler.pending_count(), 0);
        assert_eq!(h.shaper.executions_since_reset(), 0);
        assert_eq!(h.runs(1), 2);
        assert_eq!(h.runs(ROWS), 1);
    }
}
