use log::debug;
use serde::Deserialize;

use super::ease::Ease;
use super::slot::{make_slot, Slot};
use super::timeline::{Point3, Position, Timeline, TimelineBuilder};

/// How far the front card falls before it is sent to the back.
pub const DROP_DISTANCE: f64 = 500.0;
/// Delay between consecutive promoted cards, in seconds.
pub const PROMOTE_STAGGER: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingProfile {
    #[default]
    Elastic,
    Smooth,
}

/// Durations are in seconds; overlap and delay are fractions of a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingConfig {
    pub ease: Ease,
    pub dur_drop: f64,
    pub dur_move: f64,
    pub dur_return: f64,
    pub promote_overlap: f64,
    pub return_delay: f64,
}

impl EasingProfile {
    pub fn config(self) -> EasingConfig {
        match self {
            EasingProfile::Elastic => EasingConfig {
                ease: Ease::ElasticOut { amplitude: 0.6, period: 0.9 },
                dur_drop: 2.0,
                dur_move: 2.0,
                dur_return: 2.0,
                promote_overlap: 0.9,
                return_delay: 0.05,
            },
            EasingProfile::Smooth => EasingConfig {
                ease: Ease::Power1InOut,
                dur_drop: 0.8,
                dur_move: 0.8,
                dur_return: 0.8,
                promote_overlap: 0.45,
                return_delay: 0.2,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub skew: f64,
}

impl Layout {
    pub fn slot(&self, position: usize, total: usize) -> Slot {
        make_slot(position, self.spacing_x, self.spacing_y, total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub z_index: i32,
    pub skew: f64,
}

impl CardTransform {
    pub fn at_slot(slot: Slot, skew: f64) -> Self {
        Self { x: slot.x, y: slot.y, z: slot.z, z_index: slot.z_index, skew }
    }

    pub fn position(&self) -> Point3 {
        Point3 { x: self.x, y: self.y, z: self.z }
    }

    /// CSS `transform` value, centred on the element's own box.
    pub fn css(&self) -> String {
        css_transform(self.position(), self.skew)
    }
}

pub fn css_transform(at: Point3, skew: f64) -> String {
    format!(
        "translate(-50%, -50%) translate3d({}px, {}px, {}px) skewY({}deg)",
        at.x, at.y, at.z, skew
    )
}

/// A planned rotation, handed out by [`RotationEngine::begin_cycle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    pub front: usize,
    pub next_front: usize,
    pub timeline: Timeline,
}

/// Owns the stacking order of the cards and the resting transform of each one.
///
/// The order is only rewritten by [`finish_cycle`](Self::finish_cycle), and a new
/// cycle cannot begin until the previous one has finished.
#[derive(Debug)]
pub struct RotationEngine {
    order: Vec<usize>,
    registry: Vec<CardTransform>,
    layout: Layout,
    profile: EasingProfile,
    in_flight: bool,
}

impl RotationEngine {
    pub fn new(count: usize, layout: Layout, profile: EasingProfile) -> Self {
        let registry = (0..count)
            .map(|i| CardTransform::at_slot(layout.slot(i, count), layout.skew))
            .collect();
        Self {
            order: (0..count).collect(),
            registry,
            layout,
            profile,
            in_flight: false,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn transform(&self, card: usize) -> Option<&CardTransform> {
        self.registry.get(card)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn begin_cycle(&mut self) -> Option<Cycle> {
        if self.order.len() < 2 {
            return None;
        }
        if self.is_in_flight() {
            debug!("card rotation still running, skipping trigger");
            return None;
        }

        let total = self.order.len();
        let cfg = self.profile.config();
        let front = self.order[0];
        let mut tl = TimelineBuilder::new();

        let mut dropped = self.registry[front].position();
        dropped.y += DROP_DISTANCE;
        tl.to(front, dropped, cfg.dur_drop, cfg.ease, Position::End);

        tl.add_label("promote", Position::FromEnd(-cfg.dur_drop * cfg.promote_overlap));
        for (i, &card) in self.order[1..].iter().enumerate() {
            let slot = self.layout.slot(i, total);
            tl.set_z_index(card, slot.z_index, Position::Label("promote", 0.0));
            tl.to(
                card,
                Point3 { x: slot.x, y: slot.y, z: slot.z },
                cfg.dur_move,
                cfg.ease,
                Position::Label("promote", i as f64 * PROMOTE_STAGGER),
            );
            self.registry[card] = CardTransform::at_slot(slot, self.layout.skew);
        }

        let back = self.layout.slot(total - 1, total);
        tl.add_label("return", Position::Label("promote", cfg.dur_move * cfg.return_delay));
        tl.set_z_index(front, back.z_index, Position::Label("return", 0.0));
        tl.to(
            front,
            Point3 { x: back.x, y: back.y, z: back.z },
            cfg.dur_return,
            cfg.ease,
            Position::Label("return", 0.0),
        );
        self.registry[front] = CardTransform::at_slot(back, self.layout.skew);

        self.in_flight = true;
        Some(Cycle { front, next_front: self.order[1], timeline: tl.build() })
    }

    pub fn finish_cycle(&mut self) {
        if !self.in_flight {
            return;
        }
        self.order.rotate_left(1);
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card_swap::timeline::Action;

    const LAYOUT: Layout = Layout { spacing_x: 60.0, spacing_y: 70.0, skew: 6.0 };

    fn engine(count: usize) -> RotationEngine {
        RotationEngine::new(count, LAYOUT, EasingProfile::Elastic)
    }

    fn is_permutation(order: &[usize]) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..order.len()).collect::<Vec<_>>()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn one_cycle_moves_the_front_card_to_the_back() {
        let mut engine = engine(3);
        let cycle = engine.begin_cycle().expect("three cards rotate");
        assert_eq!((cycle.front, cycle.next_front), (0, 1));
        assert_eq!(engine.order(), &[0, 1, 2]);

        engine.finish_cycle();
        assert_eq!(engine.order(), &[1, 2, 0]);
        assert!(!engine.is_in_flight());
    }

    #[test]
    fn order_stays_a_permutation_over_many_cycles() {
        for count in 2..8 {
            let mut engine = engine(count);
            for cycles in 1..=20 {
                engine.begin_cycle().expect("enough cards");
                engine.finish_cycle();
                assert!(is_permutation(engine.order()));
                assert_eq!(engine.order()[0], cycles % count);
            }
        }
    }

    #[test]
    fn fewer_than_two_cards_never_rotate() {
        for count in 0..2 {
            let mut engine = engine(count);
            assert!(engine.begin_cycle().is_none());
            engine.finish_cycle();
            assert_eq!(engine.order(), (0..count).collect::<Vec<_>>().as_slice());
        }
    }

    #[test]
    fn trigger_during_a_cycle_is_skipped() {
        let mut engine = engine(3);
        engine.begin_cycle().expect("first cycle");
        assert!(engine.begin_cycle().is_none());
        assert_eq!(engine.order(), &[0, 1, 2]);

        engine.finish_cycle();
        engine.finish_cycle();
        assert_eq!(engine.order(), &[1, 2, 0]);
    }

    #[test]
    fn registry_starts_at_the_initial_slots() {
        let engine = engine(3);
        let back = engine.transform(2).unwrap();
        assert_eq!((back.x, back.y, back.z, back.z_index), (120.0, -140.0, -180.0, 1));
        assert!(engine.transform(3).is_none());
    }

    #[test]
    fn registry_tracks_cycle_targets() {
        let mut engine = engine(3);
        engine.begin_cycle().unwrap();
        assert_eq!(engine.transform(1).unwrap().z_index, 3);
        assert_eq!(engine.transform(2).unwrap().z_index, 2);
        assert_eq!(engine.transform(0).unwrap().z_index, 1);
        assert_eq!(engine.transform(0).unwrap().x, 120.0);
    }

    #[test]
    fn elastic_timeline_offsets() {
        let mut engine = engine(3);
        let tl = engine.begin_cycle().unwrap().timeline;

        let front: Vec<&_> = tl.steps_for(0).collect();
        assert_eq!(front[0].at, 0.0);
        match &front[0].action {
            Action::Tween { to, duration, .. } => {
                assert_eq!(to.y, DROP_DISTANCE);
                assert_eq!(*duration, 2.0);
            }
            other => panic!("expected drop tween, got {other:?}"),
        }
        assert!(close(front[1].at, 0.3));
        assert_eq!(front[1].action, Action::ZIndex(1));
        assert!(close(front[2].at, 0.3));

        let promoted: Vec<f64> = tl.steps_for(2).map(|s| s.at).collect();
        assert!(close(promoted[0], 0.2));
        assert!(close(promoted[1], 0.35));
        assert!(close(tl.duration(), 2.35));
    }

    #[test]
    fn smooth_timeline_is_shorter() {
        let mut engine = RotationEngine::new(3, LAYOUT, EasingProfile::Smooth);
        let tl = engine.begin_cycle().unwrap().timeline;
        let return_at = tl.steps_for(0).nth(1).unwrap().at;
        assert!(close(return_at, 0.6));
        assert!(close(tl.duration(), 1.4));
    }

    #[test]
    fn transform_css_centres_and_skews() {
        let t = CardTransform::at_slot(LAYOUT.slot(1, 3), 6.0);
        assert_eq!(
            t.css(),
            "translate(-50%, -50%) translate3d(60px, -70px, -90px) skewY(6deg)"
        );
    }
}
