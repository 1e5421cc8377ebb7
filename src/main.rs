//! Dino Runner entry point
//!
//! The browser build is a library (`RunnerGame` is mounted from page
//! JavaScript). Natively this runs a headless autopilot session and reports
//! how far it got.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_runner::{Engine, GamePhase, Tuning};

    /// Ten minutes of play at 60 steps per second
    const MAX_STEPS: u32 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Dino Runner (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in a browser");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);

    let mut engine = match Engine::new(Tuning::default(), seed) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            std::process::exit(1);
        }
    };
    engine.set_autopilot(true);
    engine.trigger_input();

    let mut steps = 0;
    while engine.phase() == GamePhase::Running && steps < MAX_STEPS {
        engine.step();
        steps += 1;
    }

    let outcome = match engine.phase() {
        GamePhase::Over => "crashed",
        _ => "still running",
    };
    println!(
        "seed {}: {} after {} steps, score {} (high score {})",
        seed,
        outcome,
        steps,
        engine.score(),
        engine.high_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start function, this is just to satisfy the compiler
}
