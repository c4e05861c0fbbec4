//! Headless mission driver.
//!
//! Builds one of the demo encounters, lets a scripted player walk and fight
//! through it, acknowledges dialogs as they appear, and prints the final
//! mission snapshot as JSON on stdout. Logs go to stderr.
//!
//! ```bash
//! SIM_SCENARIO=loop-waves RUST_LOG=mission=debug cargo run -p mission-sim
//! ```
mod config;
mod scenario;

use anyhow::Result;
use mission::{MissionConfig, MissionError};

use crate::config::SimConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let sim_config = SimConfig::from_env();
    let mission_config = MissionConfig::from_env();

    tracing::info!("Starting scenario: {}", sim_config.scenario);
    tracing::info!("Tick: {}s, budget: {} ticks", sim_config.tick_secs, sim_config.max_ticks);
    tracing::debug!("Mission config: {:?}", mission_config);

    let mut encounter =
        scenario::build(sim_config.scenario, mission_config).inspect_err(|err| {
            if let Some(err) = err.downcast_ref::<MissionError>() {
                tracing::error!(
                    "Scenario wiring failed [{}] {}: {}",
                    err.severity().as_str(),
                    err.error_code(),
                    err
                );
            }
        })?;

    let mut frames = 0;
    while frames < sim_config.max_ticks {
        frames += 1;

        if let Some(message) = encounter.mission.pending_dialog() {
            tracing::info!("Dialog acknowledged: \"{}\"", message);
            encounter.mission.acknowledge_dialog();
            continue;
        }

        encounter
            .pilot
            .step(&mut encounter.mission, encounter.player, sim_config.tick_secs);
        encounter.mission.tick(sim_config.tick_secs);

        if encounter.is_finished() {
            tracing::info!(
                "Encounter finished: {} after {} frames ({:.1}s simulated)",
                encounter.mission.status(encounter.root),
                frames,
                encounter.mission.clock().elapsed_secs()
            );
            break;
        }
    }

    if !encounter.is_finished() {
        tracing::info!("Tick budget exhausted after {} frames", frames);
    }

    let snapshot = encounter.mission.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
