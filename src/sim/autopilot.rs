//! Demo autopilot
//!
//! A simple bot that jumps when the next cactus gets close. Drives the
//! native headless run and the browser's demo mode.

use super::state::{GamePhase, GameState};

/// Steps of lookahead before a cactus reaches the runner
const LOOKAHEAD_STEPS: f32 = 6.0;

/// Should the bot press the button this step?
pub fn wants_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Running || state.run.runner.airborne {
        return false;
    }

    let runner_box = state.runner_hitbox();
    let reach = state.run.speed * LOOKAHEAD_STEPS;
    state
        .run
        .obstacles
        .iter()
        .filter(|o| o.x + o.width > runner_box.left())
        .map(|o| o.x - runner_box.right())
        .any(|gap| gap <= reach)
}
