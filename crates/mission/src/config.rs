//! Mission runtime configuration.
use std::env;

/// Tunable parameters of a [`Mission`](crate::Mission).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionConfig {
    /// Deepest allowed nesting of `begin` calls. Continuation chains and
    /// self-resetting trees can recurse without bound; a begin past this
    /// depth is dropped.
    pub max_chain_depth: usize,

    /// Spawn points within `occupancy_scale × radius` of a character count
    /// as occupied.
    pub occupancy_scale: f32,

    /// Seed for spawn-point selection. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl MissionConfig {
    pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 64;
    pub const DEFAULT_OCCUPANCY_SCALE: f32 = 2.0;

    pub const fn new() -> Self {
        Self {
            max_chain_depth: Self::DEFAULT_MAX_CHAIN_DEPTH,
            occupancy_scale: Self::DEFAULT_OCCUPANCY_SCALE,
            seed: None,
        }
    }

    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub const fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MISSION_MAX_CHAIN_DEPTH` - Nested begin cap (default: 64)
    /// - `MISSION_OCCUPANCY_SCALE` - Spawn occupancy radius multiplier (default: 2.0)
    /// - `MISSION_SEED` - Spawn rng seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Some(depth) = read_env::<usize>("MISSION_MAX_CHAIN_DEPTH") {
            config.max_chain_depth = depth.max(1);
        }

        if let Some(scale) = read_env::<f32>("MISSION_OCCUPANCY_SCALE")
            && scale.is_finite()
            && scale >= 0.0
        {
            config.occupancy_scale = scale;
        }

        config.seed = read_env::<u64>("MISSION_SEED");

        config
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self::new()
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
    fn defaults_match_constants() {
        let config = MissionConfig::default();
        assert_eq!(config.max_chain_depth, 64);
        assert_eq!(config.occupancy_scale, 2.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builders_override_fields() {
        let config = MissionConfig::new().with_seed(9).with_max_chain_depth(4);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_chain_depth, 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn round_trips_through_json() {
        let config = MissionConfig::new().with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: MissionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
