//! Driver configuration.
use std::env;

/// Demo encounter to play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ScenarioKind {
    /// Linear then parallel trigger-volume objectives.
    TriggerTour,
    /// Timer, corner wave, dialog, timer, edge wave.
    #[default]
    TwoWaves,
    /// A wave that respawns on a timer and resets the encounter when won.
    LoopWaves,
}

#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Seconds of simulation per tick.
    pub tick_secs: f32,
    /// Hard stop for encounters that never finish.
    pub max_ticks: u64,
    pub scenario: ScenarioKind,
}

impl SimConfig {
    pub const DEFAULT_TICK_SECS: f32 = 0.1;
    pub const DEFAULT_MAX_TICKS: u64 = 3_000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_TICK_SECS` - Tick length in seconds (default: 0.1)
    /// - `SIM_MAX_TICKS` - Tick budget (default: 3000)
    /// - `SIM_SCENARIO` - `trigger-tour`, `two-waves` or `loop-waves` (default: two-waves)
    pub fn from_env() -> Self {
        let tick_secs = read_env::<f32>("SIM_TICK_SECS")
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .unwrap_or(Self::DEFAULT_TICK_SECS);

        let max_ticks = read_env::<u64>("SIM_MAX_TICKS").unwrap_or(Self::DEFAULT_MAX_TICKS);

        let scenario = match env::var("SIM_SCENARIO") {
            Ok(name) => name.parse().unwrap_or_else(|_| {
                tracing::warn!("unknown SIM_SCENARIO '{}', using default", name);
                ScenarioKind::default()
            }),
            Err(_) => ScenarioKind::default(),
        };

        Self {
            tick_secs,
            max_ticks,
            scenario,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_names_are_kebab_case() {
        assert_eq!("loop-waves".parse::<ScenarioKind>(), Ok(ScenarioKind::LoopWaves));
        assert_eq!(ScenarioKind::TriggerTour.to_string(), "trigger-tour");
        assert!("LoopWaves".parse::<ScenarioKind>().is_err());
    }
}
