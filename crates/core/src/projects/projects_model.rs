//! Project domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::ASSESSMENT_FEE_UNITS;
use crate::projects::ProjectError;
use crate::{errors::ValidationError, Error, Result};

/// Lifecycle status of a project, assigned by the operations side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Pending,
    Quoted,
    Approved,
    InProgress,
    Completed,
    Rejected,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        use crate::projects::projects_constants::*;
        match self {
            ProjectStatus::Pending => PROJECT_STATUS_PENDING,
            ProjectStatus::Quoted => PROJECT_STATUS_QUOTED,
            ProjectStatus::Approved => PROJECT_STATUS_APPROVED,
            ProjectStatus::InProgress => PROJECT_STATUS_IN_PROGRESS,
            ProjectStatus::Completed => PROJECT_STATUS_COMPLETED,
            ProjectStatus::Rejected => PROJECT_STATUS_REJECTED,
        }
    }

    /// Whether the project counts as an active engagement.
    pub fn is_active(&self) -> bool {
        use crate::projects::projects_constants::ACTIVE_PROJECT_STATUSES;
        ACTIVE_PROJECT_STATUSES.contains(&self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use crate::projects::projects_constants::*;
        match s {
            s if s == PROJECT_STATUS_PENDING => Ok(ProjectStatus::Pending),
            s if s == PROJECT_STATUS_QUOTED => Ok(ProjectStatus::Quoted),
            s if s == PROJECT_STATUS_APPROVED => Ok(ProjectStatus::Approved),
            s if s == PROJECT_STATUS_IN_PROGRESS => Ok(ProjectStatus::InProgress),
            s if s == PROJECT_STATUS_COMPLETED => Ok(ProjectStatus::Completed),
            s if s == PROJECT_STATUS_REJECTED => Ok(ProjectStatus::Rejected),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

/// Status of a quote, independent of the parent project's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStatus {
    Pending,
    Approved,
    Rejected,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        use crate::projects::projects_constants::*;
        match self {
            QuoteStatus::Pending => QUOTE_STATUS_PENDING,
            QuoteStatus::Approved => QUOTE_STATUS_APPROVED,
            QuoteStatus::Rejected => QUOTE_STATUS_REJECTED,
        }
    }
}

/// Execution status of a single milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        use crate::projects::projects_constants::*;
        match self {
            MilestoneStatus::Pending => MILESTONE_STATUS_PENDING,
            MilestoneStatus::InProgress => MILESTONE_STATUS_IN_PROGRESS,
            MilestoneStatus::Completed => MILESTONE_STATUS_COMPLETED,
        }
    }
}

/// Payment state of a milestone's payment obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestonePaymentStatus {
    Pending,
    Paid,
}

impl MilestonePaymentStatus {
    pub fn as_str(&self) -> &'static str {
        use crate::projects::projects_constants::*;
        match self {
            MilestonePaymentStatus::Pending => PAYMENT_STATUS_PENDING,
            MilestonePaymentStatus::Paid => PAYMENT_STATUS_PAID,
        }
    }
}

/// A material line item on a quote.
///
/// `total_price` is a cached product of quantity and unit price, written by
/// the quoting side; the integrity checks report drift against the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub category: String,
}

/// A priced proposal for a project, composed of material line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub amount: Decimal,
    pub materials: Vec<Material>,
    pub valid_until: NaiveDate,
    pub notes: String,
    pub status: QuoteStatus,
}

/// A discrete phase of project execution tied to a payment obligation.
///
/// Milestones are ordered; milestone *i* is conventionally expected to
/// complete before *i + 1*, though nothing enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: MilestoneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDate>,
    pub payment_due: Decimal,
    pub payment_status: MilestonePaymentStatus,
}

/// Domain model representing a customer project (an "interest").
///
/// `total_paid` and `total_amount` are cached aggregates written by the
/// payments/quoting side, never recomputed here. The summary layer sums them
/// as-is; the integrity module reports drift against the line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: ProjectStatus,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub assessment_paid: bool,
    pub total_paid: Decimal,
    pub total_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

impl Project {
    /// Approves the pending quote, returning the updated record.
    ///
    /// Sets the quote and project status to approved and writes the quote
    /// amount into the cached `total_amount`.
    pub fn with_quote_approved(mut self, on: NaiveDate) -> Result<Project> {
        let quote = self.quote.as_mut().ok_or_else(|| {
            Error::Project(ProjectError::InvalidCommand(format!(
                "Project {} has no quote to approve",
                self.id
            )))
        })?;
        if quote.status != QuoteStatus::Pending {
            return Err(Error::Project(ProjectError::InvalidCommand(format!(
                "Quote {} is not awaiting approval",
                quote.id
            ))));
        }
        quote.status = QuoteStatus::Approved;
        self.total_amount = quote.amount;
        self.status = ProjectStatus::Approved;
        self.updated_at = on;
        Ok(self)
    }

    /// Rejects the pending quote, returning the updated record.
    pub fn with_quote_rejected(mut self, on: NaiveDate) -> Result<Project> {
        let quote = self.quote.as_mut().ok_or_else(|| {
            Error::Project(ProjectError::InvalidCommand(format!(
                "Project {} has no quote to reject",
                self.id
            )))
        })?;
        if quote.status != QuoteStatus::Pending {
            return Err(Error::Project(ProjectError::InvalidCommand(format!(
                "Quote {} is not awaiting approval",
                quote.id
            ))));
        }
        quote.status = QuoteStatus::Rejected;
        self.status = ProjectStatus::Rejected;
        self.updated_at = on;
        Ok(self)
    }

    /// Records payment for a completed milestone, returning the updated
    /// record with the milestone marked paid and `total_paid` increased by
    /// its `payment_due`.
    pub fn with_milestone_paid(mut self, milestone_id: &str, on: NaiveDate) -> Result<Project> {
        let milestone = self
            .milestones
            .iter_mut()
            .find(|m| m.id == milestone_id)
            .ok_or_else(|| {
                Error::Project(ProjectError::NotFound(format!(
                    "Milestone {} not found on project {}",
                    milestone_id, self.id
                )))
            })?;
        if milestone.status != MilestoneStatus::Completed {
            return Err(Error::Project(ProjectError::InvalidCommand(format!(
                "Milestone {} is not completed yet",
                milestone_id
            ))));
        }
        if milestone.payment_status != MilestonePaymentStatus::Pending {
            return Err(Error::Project(ProjectError::InvalidCommand(format!(
                "Milestone {} is already paid",
                milestone_id
            ))));
        }
        milestone.payment_status = MilestonePaymentStatus::Paid;
        let due = milestone.payment_due;
        self.total_paid += due;
        self.updated_at = on;
        Ok(self)
    }

    /// Records the fixed initial assessment fee as paid.
    pub fn with_assessment_paid(mut self, on: NaiveDate) -> Result<Project> {
        if self.assessment_paid {
            return Err(Error::Project(ProjectError::InvalidCommand(format!(
                "Assessment for project {} is already paid",
                self.id
            ))));
        }
        self.assessment_paid = true;
        self.total_paid += Decimal::from(ASSESSMENT_FEE_UNITS);
        self.updated_at = on;
        Ok(self)
    }
}

/// Input model for registering a new project interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub timeline: Option<String>,
    pub budget: Option<String>,
}

impl NewProject {
    /// Validates the registration input.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Project title cannot be empty".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Project description cannot be empty".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category cannot be empty".to_string(),
            )));
        }
        if !crate::projects::TILING_CATEGORIES.contains(&self.category.as_str()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown tiling category: {}",
                self.category
            ))));
        }
        if self.location.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Project location cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
