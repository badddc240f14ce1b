use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::error::EnvError;

/// Physical constants and episode limits, immutable for the lifetime of an
/// environment instance.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EnvConfig {
    pub gravity: f32,      // gravity acceleration (m/s²)
    pub mass: f32,         // module mass (kg)
    pub main_thrust: f32,  // main engine force (N)
    pub side_thrust: f32,  // side engine force (N)
    pub dt: f32,           // integration time step (s)
    pub max_steps: u32,    // episode cutoff (T_MAX)
    pub noise_scale: f32,  // bound on the stochastic force perturbation (N)
    pub stochastic: bool,  // whether dynamics are perturbed
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            gravity: LUNAR_GRAVITY,
            mass: LANDER_MASS,
            main_thrust: MAIN_THRUST,
            side_thrust: SIDE_THRUST,
            dt: TIME_STEP,
            max_steps: MAX_EPISODE_STEPS,
            noise_scale: NOISE_SCALE,
            stochastic: false,
        }
    }
}

impl EnvConfig {
    /// Default constants with the stochastic flag set, the one externally
    /// tunable knob of the construction contract.
    pub fn with_stochastic(stochastic: bool) -> Self {
        Self {
            stochastic,
            ..Self::default()
        }
    }

    /// Parse a config from RON text.
    pub fn from_ron_str(content: &str) -> Result<Self, EnvError> {
        Ok(ron::de::from_str::<EnvConfig>(content)?)
    }

    /// Read and parse a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }
}
