//! Data-driven game balance
//!
//! Every physics and progression constant lives in [`Tuning`]. The defaults
//! reproduce the classic feel at 60 simulation steps per second; a page can
//! override any subset of fields with a JSON object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a tuning document was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning field `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Physics, spawning and scoring constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ground_y: f32,

    // === Runner ===
    pub runner_x: f32,
    pub runner_height: f32,
    pub runner_hitbox_width: f32,
    /// Downward acceleration (px/step²)
    pub gravity: f32,
    /// Vertical velocity applied on jump (px/step, negative = up)
    pub jump_impulse: f32,

    // === Scrolling ===
    /// Scroll speed at score 0 (px/step)
    pub base_speed: f32,
    /// Score points per +1 px/step of speed
    pub speed_divisor: f32,

    // === Spawning ===
    /// Steps between spawns at score 0
    pub base_spawn_interval: u32,
    /// Spawn interval never drops below this
    pub min_spawn_interval: u32,
    /// Score points per one-step reduction of the spawn interval
    pub spawn_score_divisor: u32,
    pub obstacle_min_width: f32,
    pub obstacle_width_jitter: f32,
    pub obstacle_min_height: f32,
    pub obstacle_height_jitter: f32,

    // === Scoring ===
    /// Steps per score point
    pub score_cadence: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_y: GROUND_Y,

            runner_x: RUNNER_X,
            runner_height: RUNNER_HEIGHT,
            runner_hitbox_width: RUNNER_HITBOX_WIDTH,
            gravity: 0.6,
            jump_impulse: -12.0,

            base_speed: 5.0,
            speed_divisor: 100.0,

            base_spawn_interval: 100,
            min_spawn_interval: 60,
            spawn_score_divisor: 5,
            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_width_jitter: 10.0,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_height_jitter: 15.0,

            score_cadence: 5,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }
        // NaN fails both of these
        fn positive(x: f32) -> bool {
            x > 0.0
        }
        fn non_negative(x: f32) -> bool {
            x >= 0.0
        }

        if !positive(self.canvas_width) {
            return invalid("canvas_width", "must be positive");
        }
        if !positive(self.canvas_height) {
            return invalid("canvas_height", "must be positive");
        }
        if !positive(self.ground_y) || self.ground_y > self.canvas_height {
            return invalid("ground_y", "must lie inside the canvas");
        }
        if !positive(self.runner_height) || self.runner_height >= self.ground_y {
            return invalid("runner_height", "must be positive and fit above the ground");
        }
        if !positive(self.runner_hitbox_width) {
            return invalid("runner_hitbox_width", "must be positive");
        }
        if !positive(self.gravity) {
            return invalid("gravity", "must be positive");
        }
        if !positive(-self.jump_impulse) {
            return invalid("jump_impulse", "must be negative (upward)");
        }
        if !positive(self.base_speed) {
            return invalid("base_speed", "must be positive");
        }
        if !positive(self.speed_divisor) {
            return invalid("speed_divisor", "must be positive");
        }
        if self.min_spawn_interval == 0 {
            return invalid("min_spawn_interval", "must be at least 1");
        }
        if self.min_spawn_interval > self.base_spawn_interval {
            return invalid("min_spawn_interval", "must not exceed base_spawn_interval");
        }
        if self.spawn_score_divisor == 0 {
            return invalid("spawn_score_divisor", "must be at least 1");
        }
        if !positive(self.obstacle_min_width) || !non_negative(self.obstacle_width_jitter) {
            return invalid("obstacle_min_width", "sizes must be positive");
        }
        if !positive(self.obstacle_min_height) || !non_negative(self.obstacle_height_jitter) {
            return invalid("obstacle_min_height", "sizes must be positive");
        }
        if self.score_cadence == 0 {
            return invalid("score_cadence", "must be at least 1");
        }
        Ok(())
    }

    /// Runner's resting top edge
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.ground_y - self.runner_height
    }

    /// Steps between spawns at the given score, floored at the minimum
    pub fn spawn_interval(&self, score: u32) -> u32 {
        let tightening = score.checked_div(self.spawn_score_divisor).unwrap_or(0);
        self.base_spawn_interval
            .saturating_sub(tightening)
            .max(self.min_spawn_interval)
    }

    /// Scroll speed at the given score
    #[inline]
    pub fn speed_for_score(&self, score: u32) -> f32 {
        self.base_speed + score as f32 / self.speed_divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.ground_top(), 76.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8, "score_cadence": 3 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.score_cadence, 3);
        assert_eq!(tuning.jump_impulse, -12.0);
        assert_eq!(tuning.base_spawn_interval, 100);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let err = Tuning::from_json(r#"{ "jump_impulse": 4.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "jump_impulse",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_spawn_bounds() {
        let err =
            Tuning::from_json(r#"{ "base_spawn_interval": 50, "min_spawn_interval": 60 }"#)
                .unwrap_err();
        assert!(err.to_string().contains("min_spawn_interval"));
    }

    #[test]
    fn test_rejects_zero_cadence_and_divisors() {
        for (json, field) in [
            (r#"{ "score_cadence": 0 }"#, "score_cadence"),
            (r#"{ "spawn_score_divisor": 0 }"#, "spawn_score_divisor"),
            (
                r#"{ "base_spawn_interval": 0, "min_spawn_interval": 0 }"#,
                "min_spawn_interval",
            ),
            (r#"{ "speed_divisor": 0.0 }"#, "speed_divisor"),
        ] {
            match Tuning::from_json(json) {
                Err(TuningError::Invalid { field: got, .. }) => assert_eq!(got, field),
                other => panic!("{json} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_nan() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Tuning::default()
        };
        assert!(tuning.validate().is_err());
        let tuning = Tuning {
            jump_impulse: f32::NAN,
            ..Tuning::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_spawn_interval_tightens_then_floors() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_interval(0), 100);
        assert_eq!(tuning.spawn_interval(4), 100);
        assert_eq!(tuning.spawn_interval(50), 90);
        assert_eq!(tuning.spawn_interval(200), 60);
        assert_eq!(tuning.spawn_interval(u32::MAX), 60);
    }

    #[test]
    fn test_speed_grows_with_score() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_for_score(0), 5.0);
        assert!((tuning.speed_for_score(250) - 7.5).abs() < 1e-6);
    }
}
