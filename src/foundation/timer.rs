use crate::foundation::core::Millis;
use crate::foundation::error::{PageError, PageResult};

/// Recurring timer on the virtual clock.
///
/// The owner polls it with the current time and receives every firing that became due,
/// in order, with the exact time each one was scheduled for.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    period: Millis,
    next_due: Option<Millis>,
}

impl IntervalTimer {
    /// Create a stopped timer. `period` must be non-zero.
    pub fn new(period: Millis) -> PageResult<Self> {
        if period.is_zero() {
            return Err(PageError::validation("timer period must be > 0"));
        }
        Ok(Self {
            period,
            next_due: None,
        })
    }

    pub fn period(&self) -> Millis {
        self.period
    }

    /// Arm the timer; the first firing is one period after `now`.
    pub fn start(&mut self, now: Millis) {
        self.next_due = Some(now.saturating_add(self.period));
    }

    /// Disarm the timer. Pending firings are dropped.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Take every firing due at or before `now`.
    ///
    /// Runs in constant time however many periods have elapsed.
    pub fn poll_due(&mut self, now: Millis) -> Option<Due> {
        let first = self.next_due?;
        if first > now {
            return None;
        }
        let count = (now.0 - first.0) / self.period.0 + 1;
        let last = first.0 + (count - 1) * self.period.0;
        // A schedule that would overflow the clock ends instead of wrapping.
        self.next_due = last.checked_add(self.period.0).map(Millis);
        Some(Due {
            first,
            count,
            period: self.period,
        })
    }
}

/// Firings taken by one [`IntervalTimer::poll_due`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Due {
    /// Scheduled time of the earliest firing.
    pub first: Millis,
    /// Always at least one.
    pub count: u64,
    pub period: Millis,
}

impl Due {
    /// Scheduled time of firing `i` (0-based) in this batch.
    pub fn at(&self, i: u64) -> Millis {
        Millis(self.first.0 + i.min(self.count - 1) * self.period.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/timer.rs"]
mod tests;
