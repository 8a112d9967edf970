/// Project lifecycle statuses
///
/// Each constant is the canonical wire string for one lifecycle stage.
/// Statuses are assigned by the quoting/operations side; the portal only
/// renders them.
/// Inquiry received, awaiting review and site assessment.
pub const PROJECT_STATUS_PENDING: &str = "pending";

/// A quote has been prepared and is awaiting the customer's decision.
pub const PROJECT_STATUS_QUOTED: &str = "quoted";

/// The customer approved the quote; work is scheduled.
pub const PROJECT_STATUS_APPROVED: &str = "approved";

/// Work is underway, tracked through payment milestones.
pub const PROJECT_STATUS_IN_PROGRESS: &str = "in-progress";

/// All milestones finished and the job signed off.
pub const PROJECT_STATUS_COMPLETED: &str = "completed";

/// The inquiry or quote was declined.
pub const PROJECT_STATUS_REJECTED: &str = "rejected";

/// Statuses that count as an active engagement on the dashboard.
pub const ACTIVE_PROJECT_STATUSES: [&str; 3] = [
    PROJECT_STATUS_QUOTED,
    PROJECT_STATUS_APPROVED,
    PROJECT_STATUS_IN_PROGRESS,
];

/// Quote statuses
pub const QUOTE_STATUS_PENDING: &str = "pending";
pub const QUOTE_STATUS_APPROVED: &str = "approved";
pub const QUOTE_STATUS_REJECTED: &str = "rejected";

/// Milestone statuses
pub const MILESTONE_STATUS_PENDING: &str = "pending";
pub const MILESTONE_STATUS_IN_PROGRESS: &str = "in-progress";
pub const MILESTONE_STATUS_COMPLETED: &str = "completed";

/// Milestone payment statuses
pub const PAYMENT_STATUS_PENDING: &str = "pending";
pub const PAYMENT_STATUS_PAID: &str = "paid";

/// Service categories offered for new project registrations.
pub const TILING_CATEGORIES: [&str; 7] = [
    "Bathroom Tiling",
    "Kitchen Tiling",
    "Commercial Tiling",
    "Outdoor Tiling",
    "Pool Tiling",
    "Wall Tiling",
    "Floor Tiling",
];
