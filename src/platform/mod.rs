//! Platform abstraction layer
//!
//! Maps browser input to the single game button and drives the animation
//! frame loop. The key mapping is plain data so it can be tested natively;
//! the DOM wiring only exists on wasm32.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::RunnerGame;

/// `KeyboardEvent.code` values that press the game button
pub const JUMP_KEYS: [&str; 2] = ["Space", "ArrowUp"];

/// Does this key code press the game button?
pub fn is_jump_key(code: &str) -> bool {
    JUMP_KEYS.contains(&code)
}

/// Is an element with this tag name somewhere the user types text?
///
/// Key presses aimed at these belong to the page, not the game.
pub fn is_text_entry(tag_name: &str) -> bool {
    ["INPUT", "TEXTAREA", "SELECT"]
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Does this key toggle the demo autopilot?
pub fn is_autopilot_toggle(key: &str) -> bool {
    matches!(key, "i" | "I")
}
