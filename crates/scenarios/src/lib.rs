//! Declarative machine scenarios and the runner that drives a factory through them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use mg_core::CoreError;
use mg_machines::{FactoryConfig, Machine, MachineBehavior, MachineFactory};

/// One machine to create, with the status and metric to apply afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachineSetup {
    pub kind: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub metric: Option<String>,
}

impl MachineSetup {
    pub fn new(kind: &str, status: &str, metric: &str) -> Self {
        Self {
            kind: kind.to_string(),
            status: Some(status.to_string()),
            metric: Some(metric.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub name: String,
    /// Id prefixes and start index for the factory that builds this scenario.
    #[serde(default)]
    pub factory: FactoryConfig,
    pub machines: Vec<MachineSetup>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "demo".to_string(),
            factory: FactoryConfig::default(),
            machines: vec![
                MachineSetup::new("jet_printer", "idle", "105"),
                MachineSetup::new("conveyor", "active", "5"),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("malformed scenario json")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn build_factory(&self) -> MachineFactory {
        MachineFactory::new(self.factory.clone())
    }
}

/// A non-fatal problem hit while applying one setup.
#[derive(Debug)]
pub struct Diagnostic {
    pub setup_index: usize,
    pub error: CoreError,
}

#[derive(Debug, Default)]
pub struct ScenarioOutcome {
    pub machines: Vec<Machine>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScenarioOutcome {
    pub fn unknown_kinds(&self) -> usize {
        self.count(|e| matches!(e, CoreError::UnknownKind { .. }))
    }

    pub fn status_rejections(&self) -> usize {
        self.count(|e| matches!(e, CoreError::InvalidStatus { .. }))
    }

    fn count(&self, pred: impl Fn(&CoreError) -> bool) -> usize {
        self.diagnostics.iter().filter(|d| pred(&d.error)).count()
    }
}

pub struct ScenarioRunner {
    pub cfg: ScenarioConfig,
}

impl ScenarioRunner {
    pub fn new(cfg: ScenarioConfig) -> Self {
        Self { cfg }
    }

    /// Creates every machine in the scenario. Bad kinds and statuses are
    /// collected as diagnostics and the run carries on.
    pub fn run(&self, factory: &mut MachineFactory) -> ScenarioOutcome {
        let mut outcome = ScenarioOutcome::default();
        info!(scenario = %self.cfg.name, setups = self.cfg.machines.len(), "running scenario");

        for (setup_index, setup) in self.cfg.machines.iter().enumerate() {
            let mut machine = match factory.create_machine(&setup.kind) {
                Ok(m) => m,
                Err(error) => {
                    outcome.diagnostics.push(Diagnostic { setup_index, error });
                    continue;
                }
            };
            if let Some(status) = &setup.status {
                if let Err(error) = machine.set_status(status) {
                    outcome.diagnostics.push(Diagnostic { setup_index, error });
                }
            }
            if let Some(metric) = &setup.metric {
                machine.set_metric(metric.as_str());
            }
            outcome.machines.push(machine);
        }

        if !outcome.diagnostics.is_empty() {
            warn!(
                scenario = %self.cfg.name,
                diagnostics = outcome.diagnostics.len(),
                "scenario finished with diagnostics"
            );
        }
        outcome
    }
}

pub fn run_scenario(factory: &mut MachineFactory, cfg: &ScenarioConfig) -> ScenarioOutcome {
    ScenarioRunner::new(cfg.clone()).run(factory)
}
