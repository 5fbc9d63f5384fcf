use std::path::Path;
use std::time::Duration;

use crate::error::{PsSieveError, Result};
use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_LIMIT: u64 = 1_000_000;
pub const DEFAULT_TIME: f64 = 5.0;
pub const DEFAULT_SETTLE: f64 = 1.0;
pub const DEFAULT_TAG: &str = "wheelsieve_rust";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RaceConfig {
    /// inclusive upper bound of each sieve
    pub limit: u64,

    /// time budget in seconds; passes stop once it has elapsed
    pub time: f64,

    /// print every prime found by the last pass
    pub show: bool,

    /// implementation tag written at the start of the drag-race line
    pub tag: String,

    /// idle seconds before the clock starts
    pub settle: f64,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            time: DEFAULT_TIME,
            show: false,
            tag: DEFAULT_TAG.to_string(),
            settle: DEFAULT_SETTLE,
        }
    }
}

fn seconds(value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value).map_err(|_| PsSieveError::InvalidTimeBudget(value))
}

impl RaceConfig {
    pub fn from_toml_str(config: &str) -> Result<Self> {
        Ok(toml::de::from_str::<Self>(config)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::ser::to_string_pretty(self)?)
    }

    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(PsSieveError::InvalidLimit(self.limit));
        }

        self.budget()?;
        self.settle_delay()?;

        Ok(())
    }

    pub fn budget(&self) -> Result<Duration> {
        seconds(self.time)
    }

    pub fn settle_delay(&self) -> Result<Duration> {
        seconds(self.settle)
    }
}
