//! Clock display and virtual time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::model::{Timestamp, Timezone};

pub const CLOCK_PLACEHOLDER: &str = "--:--:--";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Format `time` as zero-padded `HH:MM:SS` in `timezone`, or the placeholder
/// while either is still unknown.
pub fn format_clock(time: Option<Timestamp>, timezone: Option<&Timezone>) -> String {
    let (Some(time), Some(timezone)) = (time, timezone) else {
        return CLOCK_PLACEHOLDER.to_owned();
    };
    let local_ms = time.as_millis() + i64::from(timezone.offset_minutes) * MS_PER_MINUTE;
    let seconds_of_day = local_ms.div_euclid(MS_PER_SECOND).rem_euclid(SECONDS_PER_DAY);
    let hours = seconds_of_day / 3600;
    let minutes = seconds_of_day % 3600 / 60;
    let seconds = seconds_of_day % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// What a virtual timer stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Tick,
    TimezoneLookup,
}

/// A timer that came due during [`VirtualClock::advance_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub kind: TimerKind,
    pub at: Timestamp,
}

#[derive(Debug, Clone)]
struct TimerEntry {
    fire_at_ms: i64,
    /// Insertion order, so equal deadlines fire first-scheduled first.
    seq: u64,
    kind: TimerKind,
    interval_ms: Option<u32>,
}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at_ms == other.fire_at_ms && self.seq == other.seq
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on (fire_at_ms, seq)
        other
            .fire_at_ms
            .cmp(&self.fire_at_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Deterministic stand-in for the browser's timers.
///
/// Holds recurring timers (the clock ticker) and one-shot timers (the
/// timezone lookup). Time only moves on [`advance_by`](Self::advance_by).
pub struct VirtualClock {
    now_ms: i64,
    next_seq: u64,
    pending: BinaryHeap<TimerEntry>,
}

impl VirtualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now_ms: start.as_millis(),
            next_seq: 0,
            pending: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> Timestamp {
        Timestamp(self.now_ms)
    }

    /// Fire `kind` every `interval_ms`, first one interval from now.
    pub fn every(&mut self, kind: TimerKind, interval_ms: u32) {
        self.push(kind, self.now_ms + i64::from(interval_ms), Some(interval_ms));
    }

    /// Fire `kind` once after `delay_ms`.
    pub fn once(&mut self, kind: TimerKind, delay_ms: u32) {
        self.push(kind, self.now_ms + i64::from(delay_ms), None);
    }

    fn push(&mut self, kind: TimerKind, fire_at_ms: i64, interval_ms: Option<u32>) {
        self.pending.push(TimerEntry {
            fire_at_ms,
            seq: self.next_seq,
            kind,
            interval_ms,
        });
        self.next_seq += 1;
    }

    /// Advance virtual time and return every timer that came due, in firing order.
    ///
    /// Recurring timers are re-armed immediately, so they can fire several
    /// times within one call.
    pub fn advance_by(&mut self, ms: u32) -> Vec<Fired> {
        let target_ms = self.now_ms + i64::from(ms);
        let mut fired = Vec::new();

        while self
            .pending
            .peek()
            .is_some_and(|entry| entry.fire_at_ms <= target_ms)
        {
            let Some(entry) = self.pending.pop() else {
                break;
            };
            fired.push(Fired {
                kind: entry.kind,
                at: Timestamp(entry.fire_at_ms),
            });
            if let Some(interval_ms) = entry.interval_ms {
                self.push(
                    entry.kind,
                    entry.fire_at_ms + i64::from(interval_ms.max(1)),
                    Some(interval_ms),
                );
            }
        }

        self.now_ms = target_ms;
        fired
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn time_to_next_timer(&self) -> Option<i64> {
        self.pending
            .peek()
            .map(|entry| (entry.fire_at_ms - self.now_ms).max(0))
    }
}
