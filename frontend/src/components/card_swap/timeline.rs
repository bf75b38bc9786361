use super::ease::Ease;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Tween { to: Point3, duration: f64, ease: Ease },
    ZIndex(i32),
}

/// One scheduled change to one card, `at` seconds after the timeline starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub at: f64,
    pub card: usize,
    pub action: Action,
}

impl Step {
    pub fn end(&self) -> f64 {
        match &self.action {
            Action::Tween { duration, .. } => self.at + duration,
            Action::ZIndex(_) => self.at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<Step>,
    duration: f64,
}

impl Timeline {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Time at which the last step finishes and completion fires.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

#[cfg(test)]
impl Timeline {
    pub fn steps_for(&self, card: usize) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().filter(move |step| step.card == card)
    }
}

/// Where a new step or label lands on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after everything added so far.
    End,
    /// Offset from the current end; negative values overlap earlier steps.
    FromEnd(f64),
    /// Offset from a named label. Unknown labels resolve to the end.
    Label(&'static str, f64),
}

#[derive(Debug, Default)]
pub struct TimelineBuilder {
    steps: Vec<Step>,
    labels: Vec<(&'static str, f64)>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn end(&self) -> f64 {
        self.steps.iter().map(Step::end).fold(0.0, f64::max)
    }

    fn resolve(&self, position: Position) -> f64 {
        let at = match position {
            Position::End => self.end(),
            Position::FromEnd(offset) => self.end() + offset,
            Position::Label(name, offset) => {
                let base = self
                    .labels
                    .iter()
                    .rev()
                    .find(|(label, _)| *label == name)
                    .map(|(_, at)| *at)
                    .unwrap_or_else(|| self.end());
                base + offset
            }
        };
        at.max(0.0)
    }

    pub fn add_label(&mut self, name: &'static str, position: Position) -> &mut Self {
        let at = self.resolve(position);
        self.labels.push((name, at));
        self
    }

    pub fn to(&mut self, card: usize, to: Point3, duration: f64, ease: Ease, position: Position) -> &mut Self {
        let at = self.resolve(position);
        self.steps.push(Step { at, card, action: Action::Tween { to, duration, ease } });
        self
    }

    pub fn set_z_index(&mut self, card: usize, z_index: i32, position: Position) -> &mut Self {
        let at = self.resolve(position);
        self.steps.push(Step { at, card, action: Action::ZIndex(z_index) });
        self
    }

    pub fn build(self) -> Timeline {
        let duration = self.end();
        let mut steps = self.steps;
        steps.sort_by(|a, b| a.at.total_cmp(&b.at));
        Timeline { steps, duration }
    }
}

/// Executes timelines. The rotation only ever talks to this trait, never to a
/// concrete animation backend.
pub trait AnimationScheduler {
    /// Runs every step of `timeline` at its offset, then calls `on_complete`
    /// once the full duration has elapsed.
    fn play(&self, timeline: Timeline, on_complete: Box<dyn FnOnce()>);
}
