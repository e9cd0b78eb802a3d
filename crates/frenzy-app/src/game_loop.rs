//! Driver loop — runs the simulation engine at the fixed tick rate and
//! streams snapshots.
//!
//! Commands arrive via `mpsc` channel from the stdin reader thread and are
//! drained at each tick boundary, ahead of the step itself.

use std::io::{BufRead, Write};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use frenzy_core::commands::PlayerCommand;
use frenzy_core::constants::TICK_RATE;
use frenzy_sim::engine::SimulationEngine;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the input thread to the driver loop.
#[derive(Debug)]
pub enum DriverCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the driver loop gracefully.
    Shutdown,
}

/// Parse one line of the stdin protocol.
///
/// `quit` shuts the driver down; anything else must be a JSON-encoded
/// `PlayerCommand`. Malformed lines are reported and skipped.
fn parse_line(line: &str) -> Option<DriverCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.eq_ignore_ascii_case("quit") {
        return Some(DriverCommand::Shutdown);
    }
    match serde_json::from_str::<PlayerCommand>(line) {
        Ok(command) => Some(DriverCommand::Player(command)),
        Err(err) => {
            log::warn!("ignoring malformed command line: {err}");
            None
        }
    }
}

/// Spawn the stdin reader thread. Returns the channel the driver drains.
pub fn spawn_input_thread() -> mpsc::Receiver<DriverCommand> {
    let (tx, rx) = mpsc::channel();

    std::thread::Builder::new()
        .name("frenzy-input".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if let Some(command) = parse_line(&line) {
                    let shutdown = matches!(command, DriverCommand::Shutdown);
                    if tx.send(command).is_err() || shutdown {
                        return;
                    }
                }
            }
            // EOF on stdin ends the session.
            let _ = tx.send(DriverCommand::Shutdown);
        })
        .expect("failed to spawn input thread");

    rx
}

/// The driver loop. Runs until a Shutdown command or the output pipe closes.
pub fn run(mut engine: SimulationEngine, commands: mpsc::Receiver<DriverCommand>) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut next_tick = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match commands.try_recv() {
                Ok(DriverCommand::Player(command)) => engine.queue_command(command),
                Ok(DriverCommand::Shutdown) => {
                    log::info!("driver shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles game-over semantics internally)
        let snapshot = engine.tick();

        // 3. Emit the snapshot for the renderer
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                if writeln!(out, "{json}").is_err() {
                    return;
                }
            }
            Err(err) => log::error!("snapshot serialization failed: {err}"),
        }

        // 4. Hold the tick rate
        next_tick += TICK_DURATION;
        let now = Instant::now();
        if next_tick > now {
            std::thread::sleep(next_tick - now);
        } else {
            // Fell behind; skip ahead rather than bursting ticks.
            next_tick = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_protocol() {
        assert!(matches!(
            parse_line(r#"{"type":"Fire"}"#),
            Some(DriverCommand::Player(PlayerCommand::Fire))
        ));
        assert!(matches!(
            parse_line(r#"{"type":"Move","forward":true}"#),
            Some(DriverCommand::Player(PlayerCommand::Move { forward: true }))
        ));
        assert!(matches!(
            parse_line(r#"{"type":"Turn","direction":"Left"}"#),
            Some(DriverCommand::Player(PlayerCommand::Turn { .. }))
        ));
        assert!(matches!(parse_line("quit"), Some(DriverCommand::Shutdown)));
        assert!(matches!(parse_line("QUIT"), Some(DriverCommand::Shutdown)));
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("not json").is_none());
    }
}
