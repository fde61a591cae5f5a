//! Easing curves for duration-driven tweens.
//!
//! Scrubbed tweens are driven by scroll position and stay linear; these
//! curves shape time-based playback only.

/// Maps progress in `[0, 1]` to eased progress in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic deceleration, the engine default.
    #[default]
    PowerOut,
    /// Quadratic acceleration then deceleration.
    PowerInOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::PowerOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Easing::PowerInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_hold_for_every_curve() {
        for easing in [Easing::Linear, Easing::PowerOut, Easing::PowerInOut] {
            assert!(easing.apply(0.0).abs() < 0.001, "{easing:?} at t=0");
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?} at t=1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::PowerOut, Easing::PowerInOut] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f32 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{easing:?} not monotonic at t={t}");
                prev = v;
            }
        }
    }

    #[test]
    fn power_out_front_loads_motion() {
        assert!((Easing::PowerOut.apply(0.5) - 0.75).abs() < 0.001);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }
}
