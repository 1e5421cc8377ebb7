//! Sprite and text primitives for the runner scene

use super::Surface;
use crate::sim::Obstacle;

/// Scene colours (CSS colour strings)
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: &'static str,
    pub ground: &'static str,
    pub runner: &'static str,
    pub obstacle: &'static str,
    pub text: &'static str,
    pub game_over: &'static str,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        background: "#171717",
        ground: "#404040",
        runner: "#a3a3a3",
        obstacle: "#22c55e",
        text: "#737373",
        game_over: "#ef4444",
    };
}

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    pub align: TextAlign,
    pub color: &'static str,
}

impl TextStyle {
    pub fn new(font: &'static str, align: TextAlign, color: &'static str) -> Self {
        Self { font, align, color }
    }
}

/// Two-frame walk cycle: one leg stretches while the other tucks
pub fn leg_offset(frame: u64) -> f32 {
    if frame % 20 < 10 { 0.0 } else { 5.0 }
}

/// Blocky T-Rex with its back edge at `x` and top at `y`
pub fn draw_runner<S: Surface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    stride: f32,
    palette: &Palette,
) {
    // Body
    surface.fill_rect(x, y + 10.0, 25.0, 25.0, palette.runner);
    // Head
    surface.fill_rect(x + 15.0, y, 20.0, 15.0, palette.runner);
    // Eye
    surface.fill_rect(x + 28.0, y + 4.0, 4.0, 4.0, palette.background);
    // Legs
    surface.fill_rect(x + 5.0, y + 35.0, 6.0, 9.0 + stride, palette.runner);
    surface.fill_rect(x + 15.0, y + 35.0, 6.0, 9.0 - stride, palette.runner);
    // Tail
    surface.fill_rect(x - 10.0, y + 15.0, 15.0, 8.0, palette.runner);
}

/// Cactus trunk with one arm on each side
pub fn draw_cactus<S: Surface + ?Sized>(
    surface: &mut S,
    obstacle: &Obstacle,
    ground_y: f32,
    palette: &Palette,
) {
    let top = ground_y - obstacle.height;
    surface.fill_rect(obstacle.x, top, obstacle.width, obstacle.height, palette.obstacle);
    surface.fill_rect(obstacle.x - 5.0, top + 10.0, 8.0, 15.0, palette.obstacle);
    surface.fill_rect(
        obstacle.x + obstacle.width - 3.0,
        top + 15.0,
        8.0,
        12.0,
        palette.obstacle,
    );
}
