use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::Callback;

use super::rotation::RotationEngine;
use super::timeline::AnimationScheduler;

/// Callbacks the carousel reports to its parent.
#[derive(Clone, Default)]
pub struct Notifier {
    pub on_card_click: Option<Callback<usize>>,
    pub on_card_swap: Option<Callback<usize>>,
}

impl Notifier {
    pub fn card_swapped(&self, index: usize) {
        if let Some(cb) = &self.on_card_swap {
            cb.emit(index);
        }
    }

    /// Reports a click on the card at `index`, first as a click and then as the
    /// new active card.
    pub fn card_clicked(&self, index: usize) {
        if let Some(cb) = &self.on_card_click {
            cb.emit(index);
        }
        self.card_swapped(index);
    }
}

/// Glues the rotation engine to an animation backend and the parent's callbacks.
pub struct CardSwapController<S: AnimationScheduler> {
    engine: Rc<RefCell<RotationEngine>>,
    scheduler: S,
    notifier: Rc<RefCell<Notifier>>,
}

impl<S: AnimationScheduler> CardSwapController<S> {
    pub fn new(engine: RotationEngine, scheduler: S, notifier: Rc<RefCell<Notifier>>) -> Self {
        Self {
            engine: Rc::new(RefCell::new(engine)),
            scheduler,
            notifier,
        }
    }

    /// Runs one rotation cycle, or nothing if the engine declines to start one.
    pub fn rotate(&self) {
        let Some(cycle) = self.engine.borrow_mut().begin_cycle() else {
            return;
        };

        debug!("rotating card {} to the back, {} to the front", cycle.front, cycle.next_front);

        // Cloned out so a synchronous re-render can replace the callbacks.
        let notifier = self.notifier.borrow().clone();
        notifier.card_swapped(cycle.next_front);

        let engine = Rc::clone(&self.engine);
        self.scheduler.play(
            cycle.timeline,
            Box::new(move || {
                let mut engine = engine.borrow_mut();
                engine.finish_cycle();
                debug!("card order is now {:?}", engine.order());
            }),
        );
    }
}

#[cfg(test)]
impl<S: AnimationScheduler> CardSwapController<S> {
    pub fn engine(&self) -> std::cell::Ref<'_, RotationEngine> {
        self.engine.borrow()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
