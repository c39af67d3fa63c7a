//! The closed sets of machine kinds and status modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MachineKind {
    JetPrinter,
    Conveyor,
}

impl MachineKind {
    pub const ALL: [MachineKind; 2] = [MachineKind::JetPrinter, MachineKind::Conveyor];

    pub fn as_str(self) -> &'static str {
        match self {
            MachineKind::JetPrinter => "jet_printer",
            MachineKind::Conveyor => "conveyor",
        }
    }

    pub fn id_prefix(self) -> char {
        match self {
            MachineKind::JetPrinter => 'A',
            MachineKind::Conveyor => 'C',
        }
    }

    pub fn valid_list() -> String {
        join_names(Self::ALL.iter().map(|k| k.as_str()))
    }
}

impl fmt::Display for MachineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MachineKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::unknown_kind(s))
    }
}

/// Operational state label. Any mode may follow any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusMode {
    Off,
    Idle,
    Active,
    Maintenance,
    Error,
}

impl StatusMode {
    pub const ALL: [StatusMode; 5] = [
        StatusMode::Off,
        StatusMode::Idle,
        StatusMode::Active,
        StatusMode::Maintenance,
        StatusMode::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusMode::Off => "off",
            StatusMode::Idle => "idle",
            StatusMode::Active => "active",
            StatusMode::Maintenance => "maintenance",
            StatusMode::Error => "error",
        }
    }

    pub fn valid_list() -> String {
        join_names(Self::ALL.iter().map(|s| s.as_str()))
    }
}

impl fmt::Display for StatusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::invalid_status(s))
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
