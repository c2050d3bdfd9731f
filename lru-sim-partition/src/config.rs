//! Partition configuration.
//!
//! The published payload values are configurable so tests and harnesses
//! can pick their own; the defaults reproduce the reference values of
//! the simulated LRUs.

use crate::records::{Ans611Control, EgiCommand, EgiExtData, EgiVorExtData, RadaltExtData};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of the whole partition.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionConfig {
    /// EGI manager configuration.
    pub egi: EgiMgrConfig,

    /// Radar altimeter manager configuration.
    pub radalt: RadaltMgrConfig,
}

/// Values published by the EGI manager's components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EgiMgrConfig {
    /// Navigation data record the EGI LRU manager publishes per tick.
    pub ext_data: EgiExtData,

    /// Control word the EGI LRU manager publishes to both modules.
    pub control: Ans611Control,

    /// Control word each module controller publishes.
    pub mod_control: Ans611Control,

    /// Command word the EGI LRU manager sends to the EGI computer.
    pub command: EgiCommand,

    /// VOR/ILS record the EGI computer publishes per tick.
    pub vor_ils: EgiVorExtData,
}

impl Default for EgiMgrConfig {
    fn default() -> Self {
        Self {
            ext_data: EgiExtData { example_field: 42 },
            control: Ans611Control { example_field: 42 },
            mod_control: Ans611Control { example_field: 1 },
            command: EgiCommand { command_field: 42 },
            vor_ils: EgiVorExtData { bearing_field: 7 },
        }
    }
}

/// Values published by the radar altimeter manager's components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadaltMgrConfig {
    /// Altitude record the radar altimeter LRU manager publishes.
    pub ext_data: RadaltExtData,
}

impl Default for RadaltMgrConfig {
    fn default() -> Self {
        Self {
            ext_data: RadaltExtData {
                altitude_field: 100,
            },
        }
    }
}
