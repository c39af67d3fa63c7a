//! Simulated machines and the factory that builds them.

use std::fmt;

use tracing::{debug, warn};

use mg_core::{
    format_timestamp, Clock, CoreError, FixedClock, MachineIdentity, MachineKind,
    MachineReading, ReadingMetric, StatusMode, SystemClock,
};

pub mod conveyor;
pub mod factory;
pub mod jet_printer;

pub use conveyor::Conveyor;
pub use factory::{FactoryConfig, MachineFactory};
pub use jet_printer::JetPrinter;

/// Identity plus current status, shared by every machine variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineBase {
    identity: MachineIdentity,
    status: Option<StatusMode>,
}

impl MachineBase {
    pub fn new(id: impl Into<String>, kind: MachineKind) -> Self {
        Self {
            identity: MachineIdentity { id: id.into(), kind },
            status: None,
        }
    }

    pub fn identity(&self) -> &MachineIdentity {
        &self.identity
    }

    /// Stores `status` if it names a valid mode. On a miss the current status
    /// is kept and a diagnostic is logged.
    pub fn set_status(&mut self, status: &str) -> Result<StatusMode, CoreError> {
        match status.parse::<StatusMode>() {
            Ok(mode) => {
                self.set_status_mode(mode);
                Ok(mode)
            }
            Err(err) => {
                warn!(
                    id = %self.identity.id,
                    given = status,
                    valid = %StatusMode::valid_list(),
                    "status mode doesn't exist, keeping current status"
                );
                Err(err)
            }
        }
    }

    pub fn set_status_mode(&mut self, mode: StatusMode) {
        debug!(id = %self.identity.id, status = %mode, "status set");
        self.status = Some(mode);
    }

    pub fn status(&self) -> Result<StatusMode, CoreError> {
        self.status.ok_or_else(|| CoreError::StatusUnset {
            id: self.identity.id.clone(),
        })
    }

    pub fn reading(&self, clock: &dyn Clock, metric: ReadingMetric) -> MachineReading {
        MachineReading {
            id: self.identity.id.clone(),
            kind: self.identity.kind,
            timestamp: format_timestamp(clock.now()),
            status: self.status,
            metric,
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "Machine ID: {}\nMachine Type: {}",
            self.identity.id, self.identity.kind
        )
    }
}

/// Capability set every simulated machine exposes.
///
/// Implementors provide access to their [`MachineBase`] and their own metric;
/// everything else has a default built on those.
pub trait MachineBehavior {
    fn base(&self) -> &MachineBase;

    fn base_mut(&mut self) -> &mut MachineBase;

    /// The variant-specific field merged into every reading.
    fn metric(&self) -> ReadingMetric;

    fn identity(&self) -> &MachineIdentity {
        self.base().identity()
    }

    fn generate_reading_with(&self, clock: &dyn Clock) -> MachineReading {
        self.base().reading(clock, self.metric())
    }

    fn generate_reading(&self) -> MachineReading {
        self.generate_reading_with(&SystemClock)
    }

    fn set_status(&mut self, status: &str) -> Result<StatusMode, CoreError> {
        self.base_mut().set_status(status)
    }

    fn set_status_mode(&mut self, mode: StatusMode) {
        self.base_mut().set_status_mode(mode)
    }

    fn status(&self) -> Result<StatusMode, CoreError> {
        self.base().status()
    }

    fn describe(&self) -> String {
        self.base().describe()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Machine {
    JetPrinter(JetPrinter),
    Conveyor(Conveyor),
}

impl Machine {
    pub fn id(&self) -> &str {
        &self.identity().id
    }

    pub fn kind(&self) -> MachineKind {
        self.identity().kind
    }

    /// Writes the variant's own metric: temperature for printers, speed for conveyors.
    pub fn set_metric(&mut self, value: impl Into<String>) {
        match self {
            Machine::JetPrinter(m) => m.set_temperature(value),
            Machine::Conveyor(m) => m.set_speed(value),
        }
    }

    pub fn as_jet_printer(&self) -> Option<&JetPrinter> {
        match self {
            Machine::JetPrinter(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_jet_printer_mut(&mut self) -> Option<&mut JetPrinter> {
        match self {
            Machine::JetPrinter(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_conveyor(&self) -> Option<&Conveyor> {
        match self {
            Machine::Conveyor(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_conveyor_mut(&mut self) -> Option<&mut Conveyor> {
        match self {
            Machine::Conveyor(m) => Some(m),
            _ => None,
        }
    }
}

impl MachineBehavior for Machine {
    fn base(&self) -> &MachineBase {
        match self {
            Machine::JetPrinter(m) => m.base(),
            Machine::Conveyor(m) => m.base(),
        }
    }

    fn base_mut(&mut self) -> &mut MachineBase {
        match self {
            Machine::JetPrinter(m) => m.base_mut(),
            Machine::Conveyor(m) => m.base_mut(),
        }
    }

    fn metric(&self) -> ReadingMetric {
        match self {
            Machine::JetPrinter(m) => m.metric(),
            Machine::Conveyor(m) => m.metric(),
        }
    }
}

impl From<JetPrinter> for Machine {
    fn from(m: JetPrinter) -> Self {
        Machine::JetPrinter(m)
    }
}

impl From<Conveyor> for Machine {
    fn from(m: Conveyor) -> Self {
        Machine::Conveyor(m)
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// One reading per machine, all stamped from a single clock sample.
pub fn generate_readings(machines: &[Machine], clock: &dyn Clock) -> Vec<MachineReading> {
    let now = FixedClock(clock.now());
    machines
        .iter()
        .map(|m| m.generate_reading_with(&now))
        .collect()
}
