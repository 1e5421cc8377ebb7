//! 2D rendering
//!
//! [`render`] turns a `&GameState` into draw calls on any [`Surface`]. It
//! never mutates game state; the browser canvas implementation lives in
//! [`canvas`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod sprites;

pub use sprites::{Palette, TextAlign, TextStyle};

use glam::Vec2;

use crate::sim::{GamePhase, GameState};

/// A 2D raster target in logical canvas units
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str);
    fn text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}

/// Draw one frame of the current state
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let tuning = &state.tuning;
    let palette = &Palette::DEFAULT;

    surface.fill_rect(
        0.0,
        0.0,
        tuning.canvas_width,
        tuning.canvas_height,
        palette.background,
    );
    surface.line(
        Vec2::new(0.0, tuning.ground_y),
        Vec2::new(tuning.canvas_width, tuning.ground_y),
        2.0,
        palette.ground,
    );

    let running = state.phase == GamePhase::Running;
    let stride = if running {
        sprites::leg_offset(state.run.frame)
    } else {
        0.0
    };
    sprites::draw_runner(surface, tuning.runner_x, state.run.runner.y, stride, palette);

    for obstacle in &state.run.obstacles {
        sprites::draw_cactus(surface, obstacle, tuning.ground_y, palette);
    }

    draw_hud(state, surface, palette);
}

fn draw_hud<S: Surface + ?Sized>(state: &GameState, surface: &mut S, palette: &Palette) {
    let tuning = &state.tuning;
    let hud_x = tuning.canvas_width - 10.0;
    let center_x = tuning.canvas_width / 2.0;
    let prompt_y = tuning.ground_y / 2.0;
    let hud = TextStyle::new("16px monospace", TextAlign::Right, palette.text);
    let prompt = TextStyle::new("14px sans-serif", TextAlign::Center, palette.text);

    match state.phase {
        GamePhase::Running => {
            let line = format!("HI {:05}  {:05}", state.high_score, state.run.score);
            surface.text(&line, hud_x, 25.0, &hud);
        }
        GamePhase::Idle => {
            surface.text("Press SPACE or TAP to start", center_x, prompt_y, &prompt);
            surface.text(&format!("HI {:05}", state.high_score), hud_x, 25.0, &hud);
        }
        GamePhase::Over => {
            let banner = TextStyle::new("bold 18px sans-serif", TextAlign::Center, palette.game_over);
            surface.text("GAME OVER", center_x, prompt_y - 10.0, &banner);
            let line = format!(
                "Score: {}  |  Press SPACE or TAP to restart",
                state.run.score
            );
            surface.text(&line, center_x, prompt_y + 15.0, &prompt);
            surface.text(&format!("HI {:05}", state.high_score), hud_x, 25.0, &hud);
        }
    }
}
