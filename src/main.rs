//! Love Prompt native entry point
//!
//! The real front end is the web page (`trunk serve`). Natively this plays
//! a scripted session and logs what the page would render.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use love_prompt::sim::{Bounds, GameEvent, GameSession};
    use love_prompt::{GameConfig, platform};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Love Prompt (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            GameConfig::from_json(&json).with_context(|| format!("parsing config {path}"))?
        }
        None => GameConfig::default(),
    };
    config.validate()?;

    let container = Bounds::new(500.0, 400.0);
    let control = Bounds::new(80.0, 40.0);
    let mut session = GameSession::new(config);

    println!(
        "Do You Love Me?  [{}]  [{}]",
        session.config().accept_label,
        session.decline_label()
    );
    for _ in 0..8 {
        for event in session.evade(control, container) {
            match event {
                GameEvent::DeclineMoved { position, scale } => println!(
                    "  decline jumps to ({:.0}, {:.0}) at {:.0}%",
                    position.x,
                    position.y,
                    scale * 100.0
                ),
                GameEvent::Pleading { text, .. } => println!("  \"{text}\""),
                GameEvent::DeclineRelabeled { label } => println!("  decline is now \"{label}\""),
                _ => {}
            }
        }
    }

    for event in session.celebrate(platform::prefers_reduced_motion()) {
        match event {
            GameEvent::Particles { count } => println!("  * {count} hearts *"),
            GameEvent::MessagePanel { title, subtitle } => println!("{title}\n{subtitle}"),
            _ => {}
        }
    }

    session.teardown();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
