use std::f64::consts::PI;

/// Number of points used when an ease is flattened into a CSS `linear()` curve.
const CSS_SAMPLES: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// Decaying sine that overshoots and settles on the target.
    ElasticOut { amplitude: f64, period: f64 },
    Power1InOut,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let p1 = amplitude.max(1.0);
                let p2 = period / amplitude.min(1.0);
                let p3 = p2 / (2.0 * PI) * (1.0 / p1).asin();
                p1 * 2f64.powf(-10.0 * t) * ((t - p3) * (2.0 * PI / p2)).sin() + 1.0
            }
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }

    /// CSS timing function that reproduces this curve in a `transition`.
    pub fn css(&self) -> String {
        match self {
            Ease::ElasticOut { .. } => {
                let points: Vec<String> = (0..=CSS_SAMPLES)
                    .map(|i| format!("{:.4}", self.apply(i as f64 / CSS_SAMPLES as f64)))
                    .collect();
                format!("linear({})", points.join(", "))
            }
            Ease::Power1InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELASTIC: Ease = Ease::ElasticOut { amplitude: 0.6, period: 0.9 };

    #[test]
    fn elastic_starts_and_ends_on_target() {
        assert_eq!(ELASTIC.apply(0.0), 0.0);
        assert_eq!(ELASTIC.apply(1.0), 1.0);
        assert!(ELASTIC.apply(0.001).abs() < 0.05);
    }

    #[test]
    fn elastic_overshoots_before_settling() {
        assert!(ELASTIC.apply(0.75) > 1.0);
        let peak = (1..100)
            .map(|i| ELASTIC.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0 && peak < 1.2, "peak was {peak}");
    }

    #[test]
    fn power1_is_symmetric_around_the_midpoint() {
        let ease = Ease::Power1InOut;
        assert_eq!(ease.apply(0.5), 0.5);
        assert!((ease.apply(0.25) + ease.apply(0.75) - 1.0).abs() < 1e-12);
        assert_eq!(ease.apply(0.25), 0.125);
    }

    #[test]
    fn elastic_css_is_a_sampled_linear_curve() {
        let css = ELASTIC.css();
        assert!(css.starts_with("linear(0.0000, "));
        assert!(css.ends_with(", 1.0000)"));
        assert_eq!(css.matches(',').count(), CSS_SAMPLES);
    }

    #[test]
    fn power1_css_is_a_cubic_bezier() {
        assert!(Ease::Power1InOut.css().starts_with("cubic-bezier("));
    }
}
