//! A fake game loop logging through the `tracing` sink.
//!
//! ```text
//! cargo run -p gatelog --example frame_loop
//! GATELOG_LEVEL=warn cargo run -p gatelog --example frame_loop
//! cargo run -p gatelog --example frame_loop --no-default-features --features release
//! ```

use gatelog::{init_tracing_sink, log_debug, log_info, log_release, log_warn, Profile, Severity};

struct Player {
    hp: u32,
    target: Option<&'static str>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let factory = init_tracing_sink(Profile::Development)?;
    let logger = factory.create_logger("MyCategory");
    let mut player = Player {
        hp: 10,
        target: None,
    };

    for frame in 0..5_u32 {
        log_info!(logger, "Start! Frame: {frame}");
        log_debug!(logger, "Target: {}", player.target);

        player.hp = player.hp.saturating_sub(3);
        if frame == 2 {
            player.target = Some("orc");
        }
        if player.hp < 5 {
            log_warn!(logger, "Something: {hp}", hp = player.hp);
        }
    }

    let build = env!("CARGO_PKG_VERSION");
    log_release!(logger, Severity::Info, "Release-only message: {build}");
    Ok(())
}
