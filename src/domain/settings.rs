//! Run settings, loadable from JSON
//!
//! ```json
//! { "size": 600, "probability": 0.6, "rngSeed": 7, "tickIntervalMs": 1 }
//! ```
//! Every field is optional; missing ones take the defaults below.

use serde::{Deserialize, Serialize};

use crate::domain::error::{check_parameters, ConstructionError};
use crate::grid::{Palette, EMPTY_COLOR, OCCUPIED_COLOR};

pub const DEFAULT_SIZE: u32 = 80;
pub const DEFAULT_PROBABILITY: f64 = 0.6;
pub const DEFAULT_RNG_SEED: u32 = 12345;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeathSettings {
    pub size: u32,
    pub probability: f64,
    pub rng_seed: u32,
    /// Cadence hint for the driver; the engine never sleeps
    pub tick_interval_ms: u32,
    pub occupied_color: u32,
    pub empty_color: u32,
}

impl Default for LeathSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            probability: DEFAULT_PROBABILITY,
            rng_seed: DEFAULT_RNG_SEED,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            occupied_color: OCCUPIED_COLOR,
            empty_color: EMPTY_COLOR,
        }
    }
}

impl LeathSettings {
    /// Parse and validate in one go
    pub fn from_json(json: &str) -> Result<Self, ConstructionError> {
        let settings: LeathSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConstructionError> {
        check_parameters(self.size, self.probability)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            occupied: self.occupied_color,
            empty: self.empty_color,
        }
    }
}
