// src/config.rs

use crate::error::SimError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds advanced by one physics tick.
pub const DT: f64 = 3600.0;

pub const TICKS_PER_DAY: u32 = 24;

/// Run parameters. Every field has the default the simulation ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Mass of the rogue body in solar masses.
    pub solar_mass: f64,
    pub days_per_frame: u32,
    pub seed: u64,
    /// Days until the rogue reaches Jupiter's orbital distance; the run lasts
    /// five times this.
    pub days_to_pass: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            solar_mass: 1.0,
            days_per_frame: 5,
            seed: 12345,
            days_to_pass: 600,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.days_per_frame == 0 {
            return Err(SimError::InvalidConfig(
                "days_per_frame must be at least 1".to_string(),
            ));
        }
        if self.days_to_pass == 0 {
            return Err(SimError::InvalidConfig(
                "days_to_pass must be at least 1".to_string(),
            ));
        }
        if !(self.solar_mass.is_finite() && self.solar_mass > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "solar_mass must be positive, got {}",
                self.solar_mass
            )));
        }
        // the frame loop counts days up to total_days + days_per_frame
        let last_day = self
            .days_to_pass
            .checked_mul(5)
            .and_then(|total| total.checked_add(self.days_per_frame));
        if last_day.is_none() {
            return Err(SimError::InvalidConfig(format!(
                "days_to_pass {} with days_per_frame {} overflows the day counter",
                self.days_to_pass, self.days_per_frame
            )));
        }
        if self.days_per_frame.checked_mul(TICKS_PER_DAY).is_none() {
            return Err(SimError::InvalidConfig(format!(
                "days_per_frame {} overflows the tick counter",
                self.days_per_frame
            )));
        }
        Ok(())
    }

    /// Only meaningful for a config that passed `validate`.
    pub fn total_days(&self) -> u32 {
        5 * self.days_to_pass
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.days_per_frame * TICKS_PER_DAY
    }

    /// Number of frames one pass produces.
    pub fn frame_count(&self) -> usize {
        self.total_days().div_ceil(self.days_per_frame) as usize
    }

    /// Output directory name: last four digits of the Unix time, rogue mass
    /// and seed, e.g. `4821_1.0_12345`.
    pub fn run_tag(&self, now: DateTime<Utc>) -> String {
        let stamp = now.timestamp().to_string();
        let tail = &stamp[stamp.len().saturating_sub(4)..];
        format!("{}_{:?}_{}", tail, self.solar_mass, self.seed)
    }
}
