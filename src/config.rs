use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tunables for the animated volcano scene. Every field has a default so a
/// config file only needs the values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub fireball_count: usize,
    pub fireball_lower_bound: f32,
    pub fireball_upper_bound: f32,
    pub fireball_speed: f32,
    pub particle_capacity: usize,
    pub particle_ceiling: f32,
    pub rubble_amplitude: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fireball_count: 2,
            fireball_lower_bound: 1.0,
            fireball_upper_bound: 9.0,
            fireball_speed: 2.0,
            particle_capacity: crate::particles::POOL_CAPACITY,
            particle_ceiling: 14.0,
            rubble_amplitude: 0.08,
        }
    }
}

impl SceneConfig {
    /// Load overrides from a JSON file. Malformed config is startup-fatal.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SceneConfig = serde_json::from_str(r#"{"fireball_count": 5}"#).unwrap();
        assert_eq!(config.fireball_count, 5);
        assert_eq!(config.particle_capacity, crate::particles::POOL_CAPACITY);
    }
}
