//! Headless frame driver for the frenzy arena simulation.
//!
//! The renderer/HUD is an external process: it feeds one JSON
//! `PlayerCommand` per stdin line and consumes one JSON snapshot per stdout
//! line, emitted at the fixed tick rate.

pub mod game_loop;
