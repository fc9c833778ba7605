//! Animated gradient backdrop behind the material cards.
//!
//! The gradient eases back and forth between two endpoint configurations,
//! one leg every five seconds. Phase math is pure over elapsed time so the
//! animation is driven entirely by the event-loop tick and is trivially
//! testable.

use std::time::{Duration, Instant};

use crate::models::Channels;

/// Seconds per leg of the alternation (config A -> B or B -> A).
pub const LEG_SECONDS: f32 = 5.0;

/// First endpoint configuration: indigo into teal.
const STOPS_A: [Channels; 2] = [
    Channels {
        red: 88.0 / 255.0,
        green: 86.0 / 255.0,
        blue: 214.0 / 255.0,
        alpha: 1.0,
    },
    Channels {
        red: 48.0 / 255.0,
        green: 176.0 / 255.0,
        blue: 199.0 / 255.0,
        alpha: 1.0,
    },
];

/// Second endpoint configuration: pink into orange.
const STOPS_B: [Channels; 2] = [
    Channels {
        red: 255.0 / 255.0,
        green: 45.0 / 255.0,
        blue: 85.0 / 255.0,
        alpha: 1.0,
    },
    Channels {
        red: 255.0 / 255.0,
        green: 149.0 / 255.0,
        blue: 0.0,
        alpha: 1.0,
    },
];

/// Smoothstep easing over [0, 1].
fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Blend factor between the two endpoint configurations at a given elapsed
/// time: 0.0 is fully config A, 1.0 fully config B. Alternates each leg.
#[must_use]
pub fn blend_at(elapsed_secs: f32) -> f32 {
    let cycle = elapsed_secs.rem_euclid(2.0 * LEG_SECONDS) / LEG_SECONDS;
    if cycle < 1.0 {
        ease(cycle)
    } else {
        ease(2.0 - cycle)
    }
}

/// Samples the gradient at a cell, blending the two configurations first and
/// then interpolating diagonally across the area.
#[must_use]
pub fn sample(x: u16, y: u16, width: u16, height: u16, blend: f32) -> Channels {
    let start = STOPS_A[0].lerp(STOPS_B[0], blend);
    let end = STOPS_A[1].lerp(STOPS_B[1], blend);

    let fx = if width > 1 {
        f32::from(x) / f32::from(width - 1)
    } else {
        0.0
    };
    let fy = if height > 1 {
        f32::from(y) / f32::from(height - 1)
    } else {
        0.0
    };

    start.lerp(end, (fx + fy) / 2.0)
}

/// Tick-driven animation state with a pause toggle.
///
/// While paused, elapsed time is frozen; resuming continues from the frozen
/// phase rather than jumping.
#[derive(Debug, Clone)]
pub struct Backdrop {
    started: Instant,
    paused: bool,
    frozen: Duration,
}

impl Backdrop {
    /// Starts the animation at phase zero.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            paused: false,
            frozen: Duration::ZERO,
        }
    }

    /// Elapsed animation time, excluding paused spans.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        if self.paused {
            self.frozen
        } else {
            now.duration_since(self.started)
        }
    }

    /// Whether the animation is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pauses or resumes the animation.
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if paused == self.paused {
            return;
        }
        if paused {
            self.frozen = now.duration_since(self.started);
        } else {
            self.started = now - self.frozen;
        }
        self.paused = paused;
    }

    /// Flips the pause state.
    pub fn toggle_paused(&mut self, now: Instant) {
        self.set_paused(!self.paused, now);
    }

    /// Current blend factor between the two endpoint configurations.
    #[must_use]
    pub fn blend(&self, now: Instant) -> f32 {
        blend_at(self.elapsed(now).as_secs_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints_alternate() {
        assert!(blend_at(0.0).abs() < 1e-6);
        assert!((blend_at(5.0) - 1.0).abs() < 1e-6);
        assert!(blend_at(10.0).abs() < 1e-6);
        assert!((blend_at(15.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_blend_midpoint() {
        // Smoothstep is exactly 0.5 halfway through each leg
        assert!((blend_at(2.5) - 0.5).abs() < 1e-6);
        assert!((blend_at(7.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_blend_stays_in_range() {
        for i in 0..200 {
            let b = blend_at(i as f32 * 0.173);
            assert!((0.0..=1.0).contains(&b));
        }
    }

    #[test]
    fn test_sample_corners() {
        // Pure config A: top-left is the first stop, bottom-right the second
        let tl = sample(0, 0, 80, 24, 0.0);
        assert_eq!(tl.hex(), STOPS_A[0].hex());

        let br = sample(79, 23, 80, 24, 0.0);
        assert_eq!(br.hex(), STOPS_A[1].hex());

        // Pure config B at the corners
        let tl_b = sample(0, 0, 80, 24, 1.0);
        assert_eq!(tl_b.hex(), STOPS_B[0].hex());
    }

    #[test]
    fn test_sample_degenerate_area() {
        // A 1x1 area must not divide by zero
        let c = sample(0, 0, 1, 1, 0.5);
        assert!((0.0..=1.0).contains(&c.red));
    }

    #[test]
    fn test_pause_freezes_phase() {
        let start = Instant::now();
        let mut backdrop = Backdrop::new(start);

        let later = start + Duration::from_secs(3);
        backdrop.set_paused(true, later);

        let much_later = later + Duration::from_secs(60);
        assert_eq!(backdrop.elapsed(much_later), Duration::from_secs(3));
        assert!((backdrop.blend(much_later) - blend_at(3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_resume_continues_from_frozen_phase() {
        let start = Instant::now();
        let mut backdrop = Backdrop::new(start);

        backdrop.set_paused(true, start + Duration::from_secs(2));
        backdrop.set_paused(false, start + Duration::from_secs(30));

        // One second after resuming, three seconds of animation have run
        let now = start + Duration::from_secs(31);
        assert_eq!(backdrop.elapsed(now), Duration::from_secs(3));
    }

    #[test]
    fn test_toggle_is_idempotent_pairwise() {
        let start = Instant::now();
        let mut backdrop = Backdrop::new(start);
        let now = start + Duration::from_secs(1);

        backdrop.toggle_paused(now);
        assert!(backdrop.is_paused());
        backdrop.toggle_paused(now);
        assert!(!backdrop.is_paused());
    }
}
