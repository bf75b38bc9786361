use std::cell::Cell;
use std::rc::Rc;

/// A source of repeating timers. Dropping the returned handle cancels the timer.
pub trait Ticker {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Paused,
    Stopped,
}

/// Fires the rotation on a fixed interval, with an optional hover pause.
pub struct Driver<T: Ticker> {
    ticker: T,
    delay_ms: u32,
    pause_on_hover: bool,
    state: Rc<Cell<DriverState>>,
    handle: Option<T::Handle>,
}

impl<T: Ticker> Driver<T> {
    pub fn new(ticker: T, delay_ms: u32, pause_on_hover: bool) -> Self {
        Self {
            ticker,
            delay_ms,
            pause_on_hover,
            state: Rc::new(Cell::new(DriverState::Stopped)),
            handle: None,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state.get()
    }

    /// Fires `tick` now and then every `delay_ms`. Calling it again replaces the
    /// previous interval; a paused driver stays paused.
    pub fn start<F>(&mut self, mut tick: F)
    where
        F: FnMut() + 'static,
    {
        self.handle = None;
        if self.state() != DriverState::Paused {
            self.state.set(DriverState::Running);
            tick();
        }

        let state = Rc::clone(&self.state);
        let handle = self.ticker.every(
            self.delay_ms,
            Box::new(move || {
                if state.get() == DriverState::Running {
                    tick();
                }
            }),
        );
        self.handle = Some(handle);
    }

    pub fn stop(&mut self) {
        self.handle = None;
        self.state.set(DriverState::Stopped);
    }

    pub fn pointer_enter(&self) {
        if self.pause_on_hover && self.state() == DriverState::Running {
            self.state.set(DriverState::Paused);
        }
    }

    pub fn pointer_leave(&self) {
        if self.state() == DriverState::Paused {
            self.state.set(DriverState::Running);
        }
    }
}

impl<T: Ticker> Drop for Driver<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::components::card_swap::testing::ManualClock;

    fn counting_driver(clock: &ManualClock, pause_on_hover: bool) -> (Driver<ManualClock>, Rc<Cell<u32>>) {
        let ticks = Rc::new(Cell::new(0));
        let mut driver = Driver::new(clock.clone(), 4000, pause_on_hover);
        let counter = Rc::clone(&ticks);
        driver.start(move || counter.set(counter.get() + 1));
        (driver, ticks)
    }

    #[test]
    fn fires_immediately_then_on_every_interval() {
        let clock = ManualClock::default();
        let (driver, ticks) = counting_driver(&clock, false);
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(ticks.get(), 1);

        clock.advance(3999);
        assert_eq!(ticks.get(), 1);
        clock.advance(1);
        assert_eq!(ticks.get(), 2);
        clock.advance(8000);
        assert_eq!(ticks.get(), 4);
    }

    #[test]
    fn hover_pauses_only_when_enabled() {
        let clock = ManualClock::default();
        let (driver, ticks) = counting_driver(&clock, false);
        driver.pointer_enter();
        assert_eq!(driver.state(), DriverState::Running);
        clock.advance(4000);
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn paused_ticks_are_ignored_until_pointer_leaves() {
        let clock = ManualClock::default();
        let (driver, ticks) = counting_driver(&clock, true);

        driver.pointer_enter();
        assert_eq!(driver.state(), DriverState::Paused);
        clock.advance(12_000);
        assert_eq!(ticks.get(), 1);

        driver.pointer_leave();
        assert_eq!(driver.state(), DriverState::Running);
        clock.advance(4000);
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn stop_cancels_the_interval() {
        let clock = ManualClock::default();
        let (mut driver, ticks) = counting_driver(&clock, true);
        driver.stop();
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(clock.active_timers(), 0);

        clock.advance(20_000);
        assert_eq!(ticks.get(), 1);

        driver.pointer_leave();
        assert_eq!(driver.state(), DriverState::Stopped);
    }

    #[test]
    fn dropping_the_driver_cancels_the_interval() {
        let clock = ManualClock::default();
        let (driver, ticks) = counting_driver(&clock, false);
        drop(driver);
        clock.advance(20_000);
        assert_eq!(ticks.get(), 1);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn restart_replaces_the_previous_interval() {
        let clock = ManualClock::default();
        let (mut driver, ticks) = counting_driver(&clock, false);
        let counter = Rc::clone(&ticks);
        driver.start(move || counter.set(counter.get() + 10));
        assert_eq!(ticks.get(), 11);
        assert_eq!(clock.active_timers(), 1);

        clock.advance(4000);
        assert_eq!(ticks.get(), 21);
    }

    #[test]
    fn restart_while_paused_stays_paused() {
        let clock = ManualClock::default();
        let (mut driver, ticks) = counting_driver(&clock, true);
        driver.pointer_enter();

        let counter = Rc::clone(&ticks);
        driver.start(move || counter.set(counter.get() + 10));
        assert_eq!(driver.state(), DriverState::Paused);
        assert_eq!(ticks.get(), 1);
        assert_eq!(clock.active_timers(), 1);

        clock.advance(8000);
        assert_eq!(ticks.get(), 1);

        driver.pointer_leave();
        clock.advance(4000);
        assert_eq!(ticks.get(), 11);
    }
}
