//! Complaint and warranty domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::complaints::ComplaintError;
use crate::{Error, Result};

/// Resolution state of a complaint.
///
/// These strings live outside the project status taxonomy; the display
/// selector handles them through its own lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }
}

/// Customer-assigned urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Coverage state of a warranty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarrantyStatus {
    Active,
    Expired,
}

impl WarrantyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarrantyStatus::Active => "active",
            WarrantyStatus::Expired => "expired",
        }
    }
}

/// A reported issue on a delivered project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: NaiveDate,
    /// Title of the project the complaint concerns
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ComplaintPriority>,
}

/// Warranty coverage attached to a delivered project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warranty {
    pub id: String,
    pub project: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: WarrantyStatus,
    pub coverage: String,
    pub terms: String,
}

/// Input model for raising a new complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub project: String,
    pub priority: Option<ComplaintPriority>,
}

impl NewComplaint {
    /// Validates the complaint input.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Complaint(ComplaintError::InvalidData(
                "Complaint title cannot be empty".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Complaint(ComplaintError::InvalidData(
                "Complaint description cannot be empty".to_string(),
            )));
        }
        if self.project.trim().is_empty() {
            return Err(Error::Complaint(ComplaintError::InvalidData(
                "A complaint must reference a project".to_string(),
            )));
        }
        Ok(())
    }
}
