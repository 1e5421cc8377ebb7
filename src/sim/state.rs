//! Game state and core simulation types
//!
//! A session's working state lives in [`RunState`] and is rebuilt wholesale
//! whenever a session starts. Only the phase and the high score outlive it.

use super::geometry::Rect;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the first input
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Session ended in a collision
    Over,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::Over => "over",
        }
    }
}

/// The player-controlled sprite (vertical motion only)
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    /// Top edge of the bounding box, pixels from the canvas top
    pub y: f32,
    /// Vertical velocity, px/step (positive = down)
    pub vy: f32,
    /// Between a jump and the next ground contact
    pub airborne: bool,
}

impl Runner {
    /// A runner standing on the ground
    pub fn grounded(tuning: &Tuning) -> Self {
        Self {
            y: tuning.ground_top(),
            vy: 0.0,
            airborne: false,
        }
    }

    pub fn hitbox(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            tuning.runner_x,
            self.y,
            tuning.runner_hitbox_width,
            tuning.runner_height,
        )
    }
}

/// A scrolling cactus, standing on the ground line
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn hitbox(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.x, tuning.ground_y - self.height, self.width, self.height)
    }

    /// Right edge has passed the left edge of the canvas
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width <= 0.0
    }
}

/// Everything that belongs to a single session
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub runner: Runner,
    /// Spawn order, which is also left-to-right order
    pub obstacles: Vec<Obstacle>,
    /// Simulated steps since the session started
    pub frame: u64,
    /// Scroll speed, px/step
    pub speed: f32,
    pub score: u32,
}

impl RunState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            runner: Runner::grounded(tuning),
            obstacles: Vec::new(),
            frame: 0,
            speed: tuning.base_speed,
            score: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub run: RunState,
    /// Best final score seen by this instance (never persisted)
    pub high_score: u32,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        let run = RunState::new(&tuning);
        Self {
            tuning,
            phase: GamePhase::Idle,
            run,
            high_score: 0,
        }
    }

    /// Throw away the current session and begin a fresh one
    pub fn start_session(&mut self) {
        self.run = RunState::new(&self.tuning);
        self.phase = GamePhase::Running;
        log::info!("Session started (high score {})", self.high_score);
    }

    /// Freeze the session and fold its score into the high score
    pub fn end_session(&mut self) {
        self.phase = GamePhase::Over;
        let score = self.run.score;
        if score > self.high_score {
            log::info!("New high score: {} (was {})", score, self.high_score);
            self.high_score = score;
        }
        log::info!("Session over at score {}", score);
    }

    pub fn runner_hitbox(&self) -> Rect {
        self.run.runner.hitbox(&self.tuning)
    }
}
