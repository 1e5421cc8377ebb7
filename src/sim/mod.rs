//! Fixed-step simulation module
//!
//! All gameplay logic lives here:
//! - One call to [`tick`] is one step at the tuned rate
//! - Randomness only through an injected [`RandomSource`]
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod geometry;
pub mod rng;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use geometry::Rect;
pub use rng::{PcgSource, RandomSource, SequenceSource};
pub use state::{GamePhase, GameState, Obstacle, RunState, Runner};
pub use tick::{tick, trigger_input};
