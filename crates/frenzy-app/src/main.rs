use frenzy_app::game_loop;
use frenzy_sim::engine::{SimConfig, SimulationEngine};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| SimConfig::default().seed);

    log::info!("starting arena simulation with seed {seed}");

    let engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    let commands = game_loop::spawn_input_thread();
    game_loop::run(engine, commands);
}
