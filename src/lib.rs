//! Dino Runner - a canvas runner mini-game
//!
//! Core modules:
//! - `engine`: Control surface tying simulation, clock and rendering together
//! - `sim`: Fixed-step simulation (physics, spawning, collisions, game state)
//! - `renderer`: Pure 2D drawing of the current state onto a surface
//! - `platform`: Browser host (animation frames, input wiring)
//! - `tuning`: Data-driven game balance

pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use engine::Engine;
pub use sim::{GamePhase, GameState};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the physics constants assume 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest wall-clock gap a single animation frame may account for
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Logical canvas dimensions
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 150.0;
    /// Ground line, measured from the top of the canvas
    pub const GROUND_Y: f32 = 120.0;

    /// Runner sprite
    pub const RUNNER_X: f32 = 20.0;
    pub const RUNNER_WIDTH: f32 = 40.0;
    pub const RUNNER_HEIGHT: f32 = 44.0;
    /// Hitbox is a little narrower than the sprite so grazes don't count
    pub const RUNNER_HITBOX_WIDTH: f32 = RUNNER_WIDTH - 5.0;

    /// Obstacle (cactus) size bounds
    pub const OBSTACLE_MIN_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 40.0;
}
