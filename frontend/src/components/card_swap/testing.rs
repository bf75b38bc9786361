//! Deterministic stand-ins for browser timers, used by the unit tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::driver::Ticker;
use super::timeline::{AnimationScheduler, Timeline};

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

struct Timer {
    id: u64,
    period: u64,
    due: u64,
    tick: Tick,
}

#[derive(Default)]
struct ClockInner {
    now: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

/// A clock that only moves when told to.
#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ClockInner>>,
}

pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<ClockInner>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().timers.retain(|timer| timer.id != self.id);
        }
    }
}

impl ManualClock {
    pub fn active_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Moves time forward by `ms`, firing every timer that falls due on the way.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;
        loop {
            let tick = {
                let mut inner = self.inner.borrow_mut();
                let next = inner
                    .timers
                    .iter_mut()
                    .filter(|timer| timer.due <= target)
                    .min_by_key(|timer| timer.due)
                    .map(|timer| {
                        let due = timer.due;
                        timer.due += timer.period.max(1);
                        (due, Rc::clone(&timer.tick))
                    });
                match next {
                    Some((due, tick)) => {
                        inner.now = due;
                        tick
                    }
                    None => break,
                }
            };
            (&mut *tick.borrow_mut())();
        }
        self.inner.borrow_mut().now = target;
    }
}

impl Ticker for ManualClock {
    type Handle = ManualTimer;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualTimer {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let period = u64::from(period_ms);
        let due = inner.now + period;
        inner.timers.push(Timer { id, period, due, tick: Rc::new(RefCell::new(tick)) });
        ManualTimer { id, clock: Rc::downgrade(&self.inner) }
    }
}

/// Records played timelines and holds their completions until released.
#[derive(Default)]
pub struct RecordingScheduler {
    played: RefCell<Vec<Timeline>>,
    pending: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl RecordingScheduler {
    pub fn played(&self) -> usize {
        self.played.borrow().len()
    }

    pub fn complete_all(&self) {
        let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for done in pending {
            done();
        }
    }
}

impl AnimationScheduler for RecordingScheduler {
    fn play(&self, timeline: Timeline, on_complete: Box<dyn FnOnce()>) {
        self.played.borrow_mut().push(timeline);
        self.pending.borrow_mut().push(on_complete);
    }
}
