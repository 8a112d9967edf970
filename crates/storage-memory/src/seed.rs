//! Seeded demo dataset.
//!
//! A fixed snapshot of one demo customer's portal: three projects in
//! different lifecycle stages, two complaints, two warranties, and the demo
//! account itself. The cached totals are reproduced as-is, including their
//! drift (the bathroom project's `total_paid` omits the assessment fee);
//! the integrity checks exist to report exactly that.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use tilefolio_core::complaints::{Complaint, ComplaintStatus, Warranty, WarrantyStatus};
use tilefolio_core::projects::{
    Material, Milestone, MilestonePaymentStatus, MilestoneStatus, Project, ProjectStatus, Quote,
    QuoteStatus,
};
use tilefolio_core::sessions::{Credentials, User};
use tilefolio_core::settings::Profile;

use crate::{
    MemoryComplaintRepository, MemoryProjectRepository, MemorySettingsRepository,
    MemoryWarrantyRepository,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The demo customer.
pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        name: "John Construction".to_string(),
        email: "john@construtech.com".to_string(),
        company: "ConstructTech Solutions".to_string(),
    }
}

/// Credentials the mock verifier accepts.
pub fn demo_credentials() -> Credentials {
    Credentials {
        email: "demo@tilefolio.app".to_string(),
        password: "demo".to_string(),
    }
}

/// The demo customer's contact profile.
pub fn demo_profile() -> Profile {
    let user = demo_user();
    Profile {
        name: user.name,
        email: user.email,
        company: user.company,
        phone: "+1 (555) 123-4567".to_string(),
        address: "123 Construction Ave, Builder City, BC 12345".to_string(),
    }
}

/// The three demo projects, in registration order.
pub fn seed_projects() -> Vec<Project> {
    vec![
        bathroom_renovation(),
        kitchen_backsplash(),
        commercial_floor(),
    ]
}

fn bathroom_renovation() -> Project {
    Project {
        id: "1".to_string(),
        title: "Bathroom Renovation - Premium Tiles".to_string(),
        description: "Complete bathroom tiling with premium ceramic tiles and waterproofing"
            .to_string(),
        category: "Bathroom Tiling".to_string(),
        status: ProjectStatus::InProgress,
        created_at: date(2024, 1, 15),
        updated_at: date(2024, 1, 20),
        quote: Some(Quote {
            id: "q1".to_string(),
            amount: dec!(8500),
            valid_until: date(2024, 2, 15),
            notes: "Premium ceramic tiles with advanced waterproofing system".to_string(),
            status: QuoteStatus::Approved,
            materials: vec![
                Material {
                    id: "m1".to_string(),
                    name: "Premium Ceramic Tiles (60x60cm)".to_string(),
                    quantity: dec!(45),
                    unit: "sq ft".to_string(),
                    unit_price: dec!(85),
                    total_price: dec!(3825),
                    category: "Tiles".to_string(),
                },
                Material {
                    id: "m2".to_string(),
                    name: "Waterproofing Membrane".to_string(),
                    quantity: dec!(50),
                    unit: "sq ft".to_string(),
                    unit_price: dec!(25),
                    total_price: dec!(1250),
                    category: "Waterproofing".to_string(),
                },
                Material {
                    id: "m3".to_string(),
                    name: "Premium Tile Adhesive".to_string(),
                    quantity: dec!(8),
                    unit: "bags".to_string(),
                    unit_price: dec!(65),
                    total_price: dec!(520),
                    category: "Adhesive".to_string(),
                },
                Material {
                    id: "m4".to_string(),
                    name: "Grout & Sealant".to_string(),
                    quantity: dec!(5),
                    unit: "kg".to_string(),
                    unit_price: dec!(45),
                    total_price: dec!(225),
                    category: "Finishing".to_string(),
                },
            ],
        }),
        milestones: vec![
            Milestone {
                id: "p1".to_string(),
                name: "Initial Assessment".to_string(),
                description: "Site survey and measurement".to_string(),
                status: MilestoneStatus::Completed,
                completed_at: Some(date(2024, 1, 16)),
                payment_due: dec!(500),
                payment_status: MilestonePaymentStatus::Paid,
            },
            Milestone {
                id: "p2".to_string(),
                name: "Material Delivery".to_string(),
                description: "All materials delivered to site".to_string(),
                status: MilestoneStatus::Completed,
                completed_at: Some(date(2024, 1, 18)),
                payment_due: dec!(1000),
                payment_status: MilestonePaymentStatus::Paid,
            },
            Milestone {
                id: "p3".to_string(),
                name: "Preparation & Waterproofing".to_string(),
                description: "Surface preparation and waterproofing installation".to_string(),
                status: MilestoneStatus::InProgress,
                completed_at: None,
                payment_due: dec!(2500),
                payment_status: MilestonePaymentStatus::Pending,
            },
            Milestone {
                id: "p4".to_string(),
                name: "Tile Installation".to_string(),
                description: "Premium tile installation and alignment".to_string(),
                status: MilestoneStatus::Pending,
                completed_at: None,
                payment_due: dec!(3000),
                payment_status: MilestonePaymentStatus::Pending,
            },
            Milestone {
                id: "p5".to_string(),
                name: "Finishing & Cleanup".to_string(),
                description: "Grouting, sealing, and final cleanup".to_string(),
                status: MilestoneStatus::Pending,
                completed_at: None,
                payment_due: dec!(1500),
                payment_status: MilestonePaymentStatus::Pending,
            },
        ],
        assessment_paid: true,
        // Cached total as written by the payments side; drifts from the
        // settled payments (assessment fee missing) and stays that way.
        total_paid: dec!(1500),
        total_amount: dec!(8500),
        location: None,
        timeline: None,
        budget: None,
    }
}

fn kitchen_backsplash() -> Project {
    Project {
        id: "2".to_string(),
        title: "Kitchen Backsplash - Designer Series".to_string(),
        description: "Designer kitchen backsplash with mosaic pattern".to_string(),
        category: "Kitchen Tiling".to_string(),
        status: ProjectStatus::Quoted,
        created_at: date(2024, 1, 20),
        updated_at: date(2024, 1, 22),
        quote: Some(Quote {
            id: "q2".to_string(),
            amount: dec!(4200),
            valid_until: date(2024, 2, 20),
            notes: "Designer mosaic tiles with premium finish".to_string(),
            status: QuoteStatus::Pending,
            materials: vec![
                Material {
                    id: "m5".to_string(),
                    name: "Designer Mosaic Tiles".to_string(),
                    quantity: dec!(25),
                    unit: "sq ft".to_string(),
                    unit_price: dec!(120),
                    total_price: dec!(3000),
                    category: "Tiles".to_string(),
                },
                Material {
                    id: "m6".to_string(),
                    name: "Premium Adhesive".to_string(),
                    quantity: dec!(3),
                    unit: "bags".to_string(),
                    unit_price: dec!(75),
                    total_price: dec!(225),
                    category: "Adhesive".to_string(),
                },
            ],
        }),
        milestones: Vec::new(),
        assessment_paid: true,
        total_paid: dec!(300),
        total_amount: dec!(4200),
        location: None,
        timeline: None,
        budget: None,
    }
}

fn commercial_floor() -> Project {
    Project {
        id: "3".to_string(),
        title: "Commercial Floor Tiling".to_string(),
        description: "Large commercial space floor tiling project".to_string(),
        category: "Commercial Tiling".to_string(),
        status: ProjectStatus::Pending,
        created_at: date(2024, 1, 25),
        updated_at: date(2024, 1, 25),
        quote: None,
        milestones: Vec::new(),
        assessment_paid: false,
        total_paid: dec!(0),
        total_amount: dec!(0),
        location: None,
        timeline: None,
        budget: None,
    }
}

/// The demo customer's complaints.
pub fn seed_complaints() -> Vec<Complaint> {
    vec![
        Complaint {
            id: "CMP001".to_string(),
            title: "Tile alignment issue".to_string(),
            description: "Some tiles in the bathroom are not properly aligned".to_string(),
            status: ComplaintStatus::InProgress,
            created_at: date(2024, 1, 15),
            project: "Bathroom Renovation".to_string(),
            priority: None,
        },
        Complaint {
            id: "CMP002".to_string(),
            title: "Grout color mismatch".to_string(),
            description: "The grout color does not match what was agreed upon".to_string(),
            status: ComplaintStatus::Resolved,
            created_at: date(2024, 1, 10),
            project: "Kitchen Backsplash".to_string(),
            priority: None,
        },
    ]
}

/// The demo customer's warranties.
pub fn seed_warranties() -> Vec<Warranty> {
    vec![
        Warranty {
            id: "WAR001".to_string(),
            project: "Bathroom Renovation".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2026, 1, 1),
            status: WarrantyStatus::Active,
            coverage: "Full material and workmanship warranty".to_string(),
            terms: "Covers defects in materials and workmanship for 2 years from completion date"
                .to_string(),
        },
        Warranty {
            id: "WAR002".to_string(),
            project: "Kitchen Backsplash".to_string(),
            start_date: date(2023, 12, 15),
            end_date: date(2025, 12, 15),
            status: WarrantyStatus::Active,
            coverage: "Material warranty".to_string(),
            terms: "Covers tile defects and installation issues for 2 years".to_string(),
        },
    ]
}

/// Project repository pre-loaded with the demo dataset.
pub fn seeded_project_repository() -> MemoryProjectRepository {
    MemoryProjectRepository::with_projects(seed_projects())
}

/// Complaint repository pre-loaded with the demo dataset.
pub fn seeded_complaint_repository() -> MemoryComplaintRepository {
    MemoryComplaintRepository::with_complaints(seed_complaints())
}

/// Warranty repository pre-loaded with the demo dataset.
pub fn seeded_warranty_repository() -> MemoryWarrantyRepository {
    MemoryWarrantyRepository::with_warranties(seed_warranties())
}

/// Settings repository pre-loaded with the demo profile.
pub fn seeded_settings_repository() -> MemorySettingsRepository {
    MemorySettingsRepository::with_profile(demo_profile())
}
