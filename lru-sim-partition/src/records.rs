//! Data records exchanged between the LRU simulations.
//!
//! All fields are example stand-ins for the real bus payloads; the
//! framework only cares that a record is a small copyable value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// External navigation data published by the EGI LRU.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EgiExtData {
    /// Example payload field.
    pub example_field: i32,
}

/// External altitude data published by the radar altimeter LRU.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadaltExtData {
    /// Example altitude above ground, feet.
    pub altitude_field: i32,
}

/// ANS-611 control word for one EGI module.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ans611Control {
    /// Example mode/control field.
    pub example_field: i32,
}

/// VOR/ILS navigation data produced by the EGI computer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EgiVorExtData {
    /// Example bearing field.
    pub bearing_field: i32,
}

/// Command word sent from the EGI LRU manager to the EGI computer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EgiCommand {
    /// Example command field.
    pub command_field: i32,
}
