//! Health board: tri-state status per probed subsystem.
//!
//! Probes run concurrently on [`HealthBoard::refresh`]; each outcome is
//! mapped onto one or more subsystems by its [`ProbeTarget`].

use crate::errors::AppResult;
use crate::loader::SnapshotSource;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    Up,
    Down,
    #[default]
    Unknown,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HealthStatus::Up => "up",
            HealthStatus::Down => "down",
            HealthStatus::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Subsystem {
    Blockchain,
    PayrollContract,
    Database,
    AiService,
}

impl Subsystem {
    pub const ALL: [Subsystem; 4] = [
        Subsystem::Blockchain,
        Subsystem::PayrollContract,
        Subsystem::Database,
        Subsystem::AiService,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subsystem::Blockchain => "blockchain",
            Subsystem::PayrollContract => "payroll_contract",
            Subsystem::Database => "database",
            Subsystem::AiService => "ai_service",
        }
    }
}

/// What a probe's outcome says about which subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeTarget {
    /// Contract reachable ⇒ chain up too; unreachable ⇒ chain unknown.
    PayrollContract,
    Database,
    AiService,
}

impl ProbeTarget {
    fn apply(self, ok: bool, statuses: &mut BTreeMap<Subsystem, HealthStatus>) {
        let up_or_down = if ok { HealthStatus::Up } else { HealthStatus::Down };
        match self {
            ProbeTarget::PayrollContract => {
                statuses.insert(Subsystem::PayrollContract, up_or_down);
                statuses.insert(
                    Subsystem::Blockchain,
                    if ok { HealthStatus::Up } else { HealthStatus::Unknown },
                );
            }
            ProbeTarget::Database => {
                statuses.insert(Subsystem::Database, up_or_down);
            }
            ProbeTarget::AiService => {
                statuses.insert(Subsystem::AiService, up_or_down);
            }
        }
    }
}

#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self) -> AppResult<()>;
}

/// A snapshot source doubles as a probe: reachable and parseable means up.
pub struct SourceProbe<'s>(pub &'s dyn SnapshotSource);

#[async_trait]
impl<'s> HealthProbe for SourceProbe<'s> {
    async fn check(&self) -> AppResult<()> {
        self.0.fetch().await.map(|_| ())
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthBoard {
    statuses: BTreeMap<Subsystem, HealthStatus>,
}

impl HealthBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, subsystem: Subsystem) -> HealthStatus {
        self.statuses.get(&subsystem).copied().unwrap_or_default()
    }

    /// Every subsystem in fixed order, unknown when never probed.
    pub fn entries(&self) -> Vec<(Subsystem, HealthStatus)> {
        Subsystem::ALL
            .into_iter()
            .map(|s| (s, self.status(s)))
            .collect()
    }

    /// Run all probes concurrently and replace the board with their outcomes.
    pub async fn refresh(&mut self, probes: &[(ProbeTarget, &dyn HealthProbe)]) {
        let outcomes =
            futures::future::join_all(probes.iter().map(|(_, probe)| probe.check())).await;

        let mut statuses = BTreeMap::new();
        for ((target, _), outcome) in probes.iter().zip(outcomes) {
            if let Err(e) = &outcome {
                tracing::info!(probe = ?target, error = %e, "health probe failed");
            }
            target.apply(outcome.is_ok(), &mut statuses);
        }
        self.statuses = statuses;
    }
}
