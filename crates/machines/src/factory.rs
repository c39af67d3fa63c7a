use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use mg_core::{CoreError, MachineKind};

use crate::{Conveyor, JetPrinter, Machine};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FactoryConfig {
    pub jet_printer_prefix: char,
    pub conveyor_prefix: char,
    pub first_index: u32,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            jet_printer_prefix: MachineKind::JetPrinter.id_prefix(),
            conveyor_prefix: MachineKind::Conveyor.id_prefix(),
            first_index: 1,
        }
    }
}

impl FactoryConfig {
    pub fn prefix(&self, kind: MachineKind) -> char {
        match kind {
            MachineKind::JetPrinter => self.jet_printer_prefix,
            MachineKind::Conveyor => self.conveyor_prefix,
        }
    }
}

/// Builds machines and hands out ids from a per-kind counter.
///
/// Created machines are returned to the caller; the factory keeps no handle on them.
#[derive(Debug, Clone, Default)]
pub struct MachineFactory {
    cfg: FactoryConfig,
    next_index: HashMap<MachineKind, u32>,
}

impl MachineFactory {
    pub fn new(cfg: FactoryConfig) -> Self {
        Self {
            cfg,
            next_index: HashMap::new(),
        }
    }

    pub fn create_machine(&mut self, kind: &str) -> Result<Machine, CoreError> {
        match kind.parse::<MachineKind>() {
            Ok(kind) => Ok(self.create(kind)),
            Err(err) => {
                warn!(given = kind, valid = %MachineKind::valid_list(), "machine type not found");
                Err(err)
            }
        }
    }

    pub fn create(&mut self, kind: MachineKind) -> Machine {
        let id = self.next_id(kind);
        info!(%id, %kind, "machine created");
        match kind {
            MachineKind::JetPrinter => Machine::JetPrinter(JetPrinter::new(id)),
            MachineKind::Conveyor => Machine::Conveyor(Conveyor::new(id)),
        }
    }

    fn next_id(&mut self, kind: MachineKind) -> String {
        let counter = self.next_index.entry(kind).or_insert(self.cfg.first_index);
        let index = *counter;
        *counter = counter.wrapping_add(1);
        format!("{}{}", self.cfg.prefix(kind), index)
    }
}
