//! Fixed-step accumulator
//!
//! Animation frames arrive at the display's refresh rate. The simulation is
//! tuned per step at 60 Hz, so wall-clock time is banked here and paid out
//! as whole steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank `dt` seconds and return how many steps to simulate now
    ///
    /// Long stalls (tab switches, debugger pauses) are clamped instead of
    /// replayed, and time beyond `MAX_SUBSTEPS` steps is dropped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        steps
    }

    /// Forget banked time (on session start)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_60hz_is_one_step_per_frame() {
        let mut clock = FrameClock::new();
        let total: u32 = (0..600).map(|_| clock.advance(1.0 / 60.0)).sum();
        assert!((599..=600).contains(&total));
    }

    #[test]
    fn test_120hz_steps_every_other_frame() {
        let mut clock = FrameClock::new();
        let total: u32 = (0..1200).map(|_| clock.advance(1.0 / 120.0)).sum();
        assert!((599..=600).contains(&total));
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(5.0), MAX_SUBSTEPS);
        // Nothing big left over from the stall
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_garbage_dt_is_ignored() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(-1.0), 0);
        clock.advance(0.01);
        clock.reset();
        assert_eq!(clock.advance(0.01), 0);
    }
}
