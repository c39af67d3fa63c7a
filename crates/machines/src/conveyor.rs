use std::fmt;

use mg_core::{MachineKind, ReadingMetric};

use crate::{MachineBase, MachineBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conveyor {
    base: MachineBase,
    speed: String,
}

impl Conveyor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: MachineBase::new(id, MachineKind::Conveyor),
            speed: String::new(),
        }
    }

    pub fn set_speed(&mut self, speed: impl Into<String>) {
        self.speed = speed.into();
    }

    pub fn speed(&self) -> &str {
        &self.speed
    }
}

impl MachineBehavior for Conveyor {
    fn base(&self) -> &MachineBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MachineBase {
        &mut self.base
    }

    fn metric(&self) -> ReadingMetric {
        ReadingMetric::Speed {
            speed: self.speed.clone(),
        }
    }
}

impl fmt::Display for Conveyor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
