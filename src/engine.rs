//! Runner-game engine
//!
//! Bundles the game state with its random source and frame clock, and
//! exposes the control surface a host needs: input, phase/score queries and
//! a per-frame update-then-render entry point.

use crate::renderer::{self, Surface};
use crate::sim::{
    FrameClock, GamePhase, GameState, PcgSource, RandomSource, autopilot, tick, trigger_input,
};
use crate::tuning::{Tuning, TuningError};

pub struct Engine {
    state: GameState,
    rng: Box<dyn RandomSource>,
    clock: FrameClock,
    autopilot: bool,
}

impl Engine {
    /// Engine with a seeded PCG random source
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::with_rng(tuning, Box::new(PcgSource::new(seed)))
    }

    /// Rejects tuning that fails [`Tuning::validate`]
    pub fn with_rng(tuning: Tuning, rng: Box<dyn RandomSource>) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::new(tuning),
            rng,
            clock: FrameClock::new(),
            autopilot: false,
        })
    }

    /// Start, jump or restart depending on the phase
    pub fn trigger_input(&mut self) {
        if self.state.phase != GamePhase::Running {
            self.clock.reset();
        }
        trigger_input(&mut self.state);
    }

    /// Begin a fresh session from any phase
    ///
    /// An interrupted running session is discarded without touching the
    /// high score.
    pub fn restart(&mut self) {
        self.clock.reset();
        self.state.start_session();
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.run.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if enabled != self.autopilot {
            log::info!("Autopilot: {}", enabled);
        }
        self.autopilot = enabled;
    }

    /// Simulate exactly one step
    pub fn step(&mut self) {
        if self.autopilot && autopilot::wants_jump(&self.state) {
            trigger_input(&mut self.state);
        }
        tick(&mut self.state, self.rng.as_mut());
    }

    /// Bank `dt` seconds of wall-clock time and run the steps it pays for
    ///
    /// Returns the number of steps simulated.
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.state.phase != GamePhase::Running {
            return 0;
        }
        let steps = self.clock.advance(dt);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        renderer::render(&self.state, surface);
    }

    /// Per-animation-frame entry point: update, then render if a surface is available
    pub fn frame<S: Surface + ?Sized>(&mut self, dt: f32, surface: Option<&mut S>) {
        self.update(dt);
        match surface {
            Some(surface) => self.render(surface),
            None => log::debug!("No drawing surface, skipping render"),
        }
    }
}
