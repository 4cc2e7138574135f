//! Partial project updates.
//!
//! A [`ProjectPatch`] carries `Option` fields; only `Some` fields are merged
//! onto the target. `id` and `last_updated` are not patchable: identity is
//! fixed and the timestamp is stamped by the provider.

use oneka_core::{Milestone, ProcurementData, Project, ProjectStatus, RiskLevel};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_sum: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<Milestone>>,
    /// `Some(None)` clears the procurement record.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub procurement: Option<Option<ProcurementData>>,
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent field (`None`).
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProjectPatch {
    #[must_use]
    pub fn builder() -> ProjectPatchBuilder {
        ProjectPatchBuilder::new()
    }

    /// Names of the fields this patch sets, in declaration order.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let mut mark = |set: bool, name: &'static str| {
            if set {
                fields.push(name);
            }
        };
        mark(self.name.is_some(), "name");
        mark(self.county.is_some(), "county");
        mark(self.sector.is_some(), "sector");
        mark(self.contract_sum.is_some(), "contractSum");
        mark(self.amount_paid.is_some(), "amountPaid");
        mark(self.risk_level.is_some(), "riskLevel");
        mark(self.audit_status.is_some(), "auditStatus");
        mark(self.entity.is_some(), "entity");
        mark(self.status.is_some(), "status");
        mark(self.milestones.is_some(), "milestones");
        mark(self.procurement.is_some(), "procurement");
        fields
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Merge every set field onto `project`.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name.clone_from(name);
        }
        if let Some(county) = &self.county {
            project.county.clone_from(county);
        }
        if let Some(sector) = &self.sector {
            project.sector.clone_from(sector);
        }
        if let Some(contract_sum) = self.contract_sum {
            project.contract_sum = contract_sum;
        }
        if let Some(amount_paid) = self.amount_paid {
            project.amount_paid = amount_paid;
        }
        if let Some(risk_level) = self.risk_level {
            project.risk_level = risk_level;
        }
        if let Some(audit_status) = &self.audit_status {
            project.audit_status.clone_from(audit_status);
        }
        if let Some(entity) = &self.entity {
            project.entity.clone_from(entity);
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(milestones) = &self.milestones {
            project.milestones.clone_from(milestones);
        }
        if let Some(procurement) = &self.procurement {
            project.procurement.clone_from(procurement);
        }
    }
}

pub struct ProjectPatchBuilder(ProjectPatch);

impl Default for ProjectPatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectPatch::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn county(mut self, county: impl Into<String>) -> Self {
        self.0.county = Some(county.into());
        self
    }

    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.0.sector = Some(sector.into());
        self
    }

    #[must_use]
    pub const fn contract_sum(mut self, contract_sum: u64) -> Self {
        self.0.contract_sum = Some(contract_sum);
        self
    }

    #[must_use]
    pub const fn amount_paid(mut self, amount_paid: u64) -> Self {
        self.0.amount_paid = Some(amount_paid);
        self
    }

    #[must_use]
    pub const fn risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.0.risk_level = Some(risk_level);
        self
    }

    #[must_use]
    pub fn audit_status(mut self, audit_status: impl Into<String>) -> Self {
        self.0.audit_status = Some(audit_status.into());
        self
    }

    #[must_use]
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.0.entity = Some(entity.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ProjectStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.0.milestones = Some(milestones);
        self
    }

    #[must_use]
    pub fn procurement(mut self, procurement: Option<ProcurementData>) -> Self {
        self.0.procurement = Some(procurement);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectPatch {
        self.0
    }
}
