use std::fmt;

use mg_core::{MachineKind, ReadingMetric};

use crate::{MachineBase, MachineBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JetPrinter {
    base: MachineBase,
    temperature: String,
}

impl JetPrinter {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: MachineBase::new(id, MachineKind::JetPrinter),
            temperature: String::new(),
        }
    }

    pub fn set_temperature(&mut self, temperature: impl Into<String>) {
        self.temperature = temperature.into();
    }

    pub fn temperature(&self) -> &str {
        &self.temperature
    }
}

impl MachineBehavior for JetPrinter {
    fn base(&self) -> &MachineBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MachineBase {
        &mut self.base
    }

    fn metric(&self) -> ReadingMetric {
        ReadingMetric::Temperature {
            temperature: self.temperature.clone(),
        }
    }
}

impl fmt::Display for JetPrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
