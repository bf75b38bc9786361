use std::cell::RefCell;

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use thiserror::Error;
use web_sys::HtmlElement;
use yew::NodeRef;

use super::driver::Ticker;
use super::rotation::{css_transform, RotationEngine};
use super::timeline::{Action, AnimationScheduler, Step, Timeline};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardSwapError {
    #[error("card {index} is not mounted")]
    MissingElement { index: usize },
    #[error("browser rejected `{property}` on card {index}")]
    Style { index: usize, property: &'static str },
}

fn millis(seconds: f64) -> u32 {
    (seconds * 1000.0).round().max(0.0) as u32
}

/// Puts every card at its resting slot without animating.
pub fn place_cards(cards: &[NodeRef], engine: &RotationEngine) -> Result<(), CardSwapError> {
    let elements = cards
        .iter()
        .enumerate()
        .map(|(index, node)| {
            node.cast::<HtmlElement>()
                .ok_or(CardSwapError::MissingElement { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (index, element) in elements.iter().enumerate() {
        let Some(transform) = engine.transform(index) else {
            continue;
        };
        let style = element.style();
        let properties = [
            ("transition", "none".to_string()),
            ("transform-origin", "center center".to_string()),
            ("transform", transform.css()),
            ("z-index", transform.z_index.to_string()),
        ];
        for (property, value) in properties {
            style
                .set_property(property, &value)
                .map_err(|_| CardSwapError::Style { index, property })?;
        }
    }
    Ok(())
}

/// Plays timelines with CSS transitions, one timeout per step.
///
/// Pending timeouts live as long as the scheduler, so dropping it stops any
/// animation that has not started yet along with the completion callback.
pub struct DomScheduler {
    cards: Vec<NodeRef>,
    skew: f64,
    pending: RefCell<Vec<Timeout>>,
}

impl DomScheduler {
    pub fn new(cards: Vec<NodeRef>, skew: f64) -> Self {
        Self {
            cards,
            skew,
            pending: RefCell::new(Vec::new()),
        }
    }
}

impl AnimationScheduler for DomScheduler {
    fn play(&self, timeline: Timeline, on_complete: Box<dyn FnOnce()>) {
        let mut pending = self.pending.borrow_mut();
        pending.clear();

        for step in timeline.steps() {
            let Some(node) = self.cards.get(step.card).cloned() else {
                warn!("timeline refers to unknown card {}", step.card);
                continue;
            };
            let step = step.clone();
            let skew = self.skew;
            pending.push(Timeout::new(millis(step.at), move || {
                apply_step(&node, &step, skew)
            }));
        }
        pending.push(Timeout::new(millis(timeline.duration()), on_complete));
    }
}

/// Style writes that carry out one timeline step, in order.
fn step_properties(step: &Step, skew: f64) -> Vec<(&'static str, String)> {
    match &step.action {
        Action::Tween { to, duration, ease } => vec![
            ("transition", format!("transform {}ms {}", millis(*duration), ease.css())),
            ("transform", css_transform(*to, skew)),
        ],
        Action::ZIndex(z_index) => vec![("z-index", z_index.to_string())],
    }
}

fn apply_step(node: &NodeRef, step: &Step, skew: f64) {
    let Some(element) = node.cast::<HtmlElement>() else {
        warn!("card {} unmounted mid-animation", step.card);
        return;
    };
    let style = element.style();
    for (property, value) in step_properties(step, skew) {
        if style.set_property(property, &value).is_err() {
            let err = CardSwapError::Style { index: step.card, property };
            warn!("skipping animation step: {}", err);
            return;
        }
    }
}

/// Repeating browser timer backed by `setInterval`.
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}
