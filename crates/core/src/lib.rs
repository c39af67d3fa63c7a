//! Core types for the simulated machine data generator.

use serde::{Deserialize, Serialize};

pub mod clock;
pub mod registry;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use registry::{MachineKind, StatusMode};

pub type MachineId = String;

/// Identity assigned by the factory at construction and never changed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachineIdentity {
    pub id: MachineId,
    pub kind: MachineKind,
}

/// The kind-specific metric carried by a reading.
///
/// Serialized untagged so that it flattens into the reading as a single
/// `temperature` or `speed` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ReadingMetric {
    Temperature { temperature: String },
    Speed { speed: String },
}

impl ReadingMetric {
    pub fn field(&self) -> &'static str {
        match self {
            ReadingMetric::Temperature { .. } => "temperature",
            ReadingMetric::Speed { .. } => "speed",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ReadingMetric::Temperature { temperature } => temperature,
            ReadingMetric::Speed { speed } => speed,
        }
    }
}

/// A flat snapshot of one machine, built fresh on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachineReading {
    pub id: MachineId,
    pub kind: MachineKind,
    pub timestamp: String,
    pub status: Option<StatusMode>,
    #[serde(flatten)]
    pub metric: ReadingMetric,
}

impl MachineReading {
    pub fn to_json_line(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// True when every field other than the timestamp matches.
    pub fn same_state_as(&self, other: &MachineReading) -> bool {
        self.id == other.id
            && self.kind == other.kind
            && self.status == other.status
            && self.metric == other.metric
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Machine type not found. Available Types: {available}")]
    UnknownKind { given: String, available: String },
    #[error("Status mode `{given}` doesn't exist, choose available mode: {available}")]
    InvalidStatus { given: String, available: String },
    #[error("machine {id} has no status set")]
    StatusUnset { id: MachineId },
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl CoreError {
    pub fn unknown_kind(given: &str) -> Self {
        CoreError::UnknownKind {
            given: given.to_string(),
            available: MachineKind::valid_list(),
        }
    }

    pub fn invalid_status(given: &str) -> Self {
        CoreError::InvalidStatus {
            given: given.to_string(),
            available: StatusMode::valid_list(),
        }
    }
}
