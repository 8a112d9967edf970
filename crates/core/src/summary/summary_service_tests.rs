//! Tests for the derived-data layer.
//!
//! These pin the contracts the views depend on: filter membership and
//! ordering, cached-total sums, payment-history shape and sort order, and
//! the explicit no-quote progress state.

#[cfg(test)]
mod tests {
    use crate::projects::{
        Milestone, MilestonePaymentStatus, MilestoneStatus, Project, ProjectStatus, Quote,
        QuoteStatus,
    };
    use crate::summary::{
        active_projects, completed_projects, dashboard_summary, payment_history,
        pending_payments, percent_complete, projects_with_payments, total_paid_across_all,
        total_paid_in_month, total_value_across_all, PaymentEventKind, PaymentProgress,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    // ==================== Filter Tests ====================

    #[test]
    fn test_active_projects_is_exact_subset_in_input_order() {
        let records = vec![
            project("p1", ProjectStatus::InProgress),
            project("p2", ProjectStatus::Pending),
            project("p3", ProjectStatus::Quoted),
            project("p4", ProjectStatus::Completed),
            project("p5", ProjectStatus::Approved),
            project("p6", ProjectStatus::Rejected),
        ];

        let ids: Vec<String> = active_projects(&records)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1", "p3", "p5"]);
    }

    #[test]
    fn test_completed_projects_filter() {
        let records = vec![
            project("p1", ProjectStatus::Completed),
            project("p2", ProjectStatus::InProgress),
            project("p3", ProjectStatus::Completed),
        ];
        let ids: Vec<String> = completed_projects(&records)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    // ==================== Total Tests ====================

    #[test]
    fn test_totals_sum_cached_fields() {
        let mut a = project("p1", ProjectStatus::InProgress);
        a.total_paid = dec!(1500);
        a.total_amount = dec!(8500);
        let mut b = project("p2", ProjectStatus::Quoted);
        b.total_paid = dec!(300);
        b.total_amount = dec!(4200);

        let records = vec![a, b];
        assert_eq!(total_paid_across_all(&records), dec!(1800));
        assert_eq!(total_value_across_all(&records), dec!(12700));
    }

    #[test]
    fn test_totals_over_empty_input_are_zero() {
        assert_eq!(total_paid_across_all(&[]), dec!(0));
        assert_eq!(total_value_across_all(&[]), dec!(0));
    }

    #[test]
    fn test_dashboard_summary_composes_the_four_values() {
        let mut a = project("p1", ProjectStatus::InProgress);
        a.total_paid = dec!(1500);
        a.total_amount = dec!(8500);
        let b = project("p2", ProjectStatus::Completed);

        let summary = dashboard_summary(&[a, b]);
        assert_eq!(summary.active_projects, 1);
        assert_eq!(summary.completed_projects, 1);
        assert_eq!(summary.total_paid, dec!(1500));
        assert_eq!(summary.total_value, dec!(8500));
    }

    // ==================== Progress Tests ====================

    #[test]
    fn test_percent_complete_rounds_to_nearest_whole() {
        let mut p = project("p1", ProjectStatus::InProgress);
        p.total_paid = dec!(1500);
        p.total_amount = dec!(8500);
        // 17.65% rounds up
        assert_eq!(percent_complete(&p), PaymentProgress::Percent(18));
    }

    #[test]
    fn test_percent_complete_zero_denominator_is_no_quote_yet() {
        let mut p = project("p1", ProjectStatus::Pending);
        p.total_paid = dec!(0);
        p.total_amount = dec!(0);
        assert_eq!(percent_complete(&p), PaymentProgress::NoQuoteYet);
    }

    #[test]
    fn test_percent_complete_fully_paid_is_100() {
        let mut p = project("p1", ProjectStatus::Completed);
        p.total_paid = dec!(4200);
        p.total_amount = dec!(4200);
        assert_eq!(percent_complete(&p), PaymentProgress::Percent(100));
    }

    // ==================== Payment History Tests ====================

    #[test]
    fn test_assessment_event_appears_iff_assessment_paid() {
        let mut paid = project("p1", ProjectStatus::Quoted);
        paid.assessment_paid = true;
        paid.created_at = date(2024, 1, 15);
        let mut unpaid = project("p2", ProjectStatus::Pending);
        unpaid.assessment_paid = false;

        let events = payment_history(&[paid, unpaid]);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, PaymentEventKind::Assessment);
        assert_eq!(events[0].id, "assess-p1");
        assert_eq!(events[0].label, "Assessment");
        assert_eq!(events[0].amount, dec!(300));
        assert_eq!(events[0].date, date(2024, 1, 15));
    }

    #[test]
    fn test_every_paid_milestone_appears_exactly_once() {
        let mut p = project("p1", ProjectStatus::InProgress);
        p.assessment_paid = false;
        p.milestones = vec![
            milestone("m1", MilestoneStatus::Completed, Some(date(2024, 1, 16)), dec!(500), MilestonePaymentStatus::Paid),
            milestone("m2", MilestoneStatus::Completed, Some(date(2024, 1, 18)), dec!(1000), MilestonePaymentStatus::Paid),
            milestone("m3", MilestoneStatus::InProgress, None, dec!(2500), MilestonePaymentStatus::Pending),
        ];

        let events = payment_history(&[p]);

        let ids: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["milestone-m2", "milestone-m1"]);
        assert!(events.iter().all(|e| e.kind == PaymentEventKind::Milestone));
    }

    #[test]
    fn test_history_is_sorted_non_increasing_by_date() {
        let mut a = project("p1", ProjectStatus::InProgress);
        a.assessment_paid = true;
        a.created_at = date(2024, 1, 15);
        a.milestones = vec![
            milestone("m1", MilestoneStatus::Completed, Some(date(2024, 1, 16)), dec!(500), MilestonePaymentStatus::Paid),
            milestone("m2", MilestoneStatus::Completed, Some(date(2024, 1, 18)), dec!(1000), MilestonePaymentStatus::Paid),
        ];
        let mut b = project("p2", ProjectStatus::Quoted);
        b.assessment_paid = true;
        b.created_at = date(2024, 1, 20);

        let events = payment_history(&[a, b]);

        let dates: Vec<NaiveDate> = events.iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|x, y| y.cmp(x));
        assert_eq!(dates, sorted);
        assert_eq!(events[0].id, "assess-p2");
    }

    #[test]
    fn test_history_ties_keep_input_order() {
        let mut a = project("p1", ProjectStatus::Quoted);
        a.assessment_paid = true;
        a.created_at = date(2024, 1, 15);
        let mut b = project("p2", ProjectStatus::Quoted);
        b.assessment_paid = true;
        b.created_at = date(2024, 1, 15);

        let events = payment_history(&[a, b]);
        let ids: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["assess-p1", "assess-p2"]);
    }

    #[test]
    fn test_milestone_without_completion_date_falls_back_to_record_update_date() {
        let mut p = project("p1", ProjectStatus::InProgress);
        p.assessment_paid = false;
        p.updated_at = date(2024, 1, 20);
        p.milestones = vec![milestone(
            "m1",
            MilestoneStatus::Completed,
            None,
            dec!(750),
            MilestonePaymentStatus::Paid,
        )];

        let events = payment_history(&[p]);
        assert_eq!(events[0].date, date(2024, 1, 20));
    }

    // ==================== Pending Payment Tests ====================

    #[test]
    fn test_pending_payments_are_completed_and_unpaid_milestones() {
        let mut a = project("p1", ProjectStatus::InProgress);
        a.milestones = vec![
            milestone("m1", MilestoneStatus::Completed, Some(date(2024, 1, 16)), dec!(500), MilestonePaymentStatus::Paid),
            milestone("m2", MilestoneStatus::Completed, None, dec!(2500), MilestonePaymentStatus::Pending),
            milestone("m3", MilestoneStatus::Pending, None, dec!(3000), MilestonePaymentStatus::Pending),
        ];
        let mut b = project("p2", ProjectStatus::InProgress);
        b.milestones = vec![milestone(
            "m4",
            MilestoneStatus::Completed,
            Some(date(2024, 1, 19)),
            dec!(800),
            MilestonePaymentStatus::Pending,
        )];

        let pending = pending_payments(&[a, b]);

        let ids: Vec<String> = pending.iter().map(|p| p.milestone.id.clone()).collect();
        assert_eq!(ids, vec!["m2", "m4"]);
        assert_eq!(pending[0].project_id, "p1");
        assert_eq!(pending[1].project_id, "p2");
    }

    #[test]
    fn test_pending_payments_empty_without_milestones() {
        let records = vec![project("p1", ProjectStatus::Quoted)];
        assert!(pending_payments(&records).is_empty());
    }

    // ==================== Payments Page Stats ====================

    #[test]
    fn test_projects_with_payments_counts_nonzero_total_paid() {
        let mut a = project("p1", ProjectStatus::InProgress);
        a.total_paid = dec!(1500);
        let b = project("p2", ProjectStatus::Pending);

        assert_eq!(projects_with_payments(&[a, b]), 1);
    }

    #[test]
    fn test_total_paid_in_month_matches_year_and_month() {
        let mut a = project("p1", ProjectStatus::InProgress);
        a.assessment_paid = true;
        a.created_at = date(2024, 1, 15);
        a.milestones = vec![
            milestone("m1", MilestoneStatus::Completed, Some(date(2024, 2, 2)), dec!(500), MilestonePaymentStatus::Paid),
            // Same month, previous year: must not count
            milestone("m2", MilestoneStatus::Completed, Some(date(2023, 2, 10)), dec!(900), MilestonePaymentStatus::Paid),
        ];

        assert_eq!(total_paid_in_month(&[a.clone()], 2024, 2), dec!(500));
        assert_eq!(total_paid_in_month(&[a], 2024, 1), dec!(300));
    }

    // ==================== Helper Functions ====================

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(id: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            description: "Tiling work".to_string(),
            category: "Bathroom Tiling".to_string(),
            status,
            created_at: date(2024, 1, 10),
            updated_at: date(2024, 1, 12),
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

    #[allow(dead_code)]
    fn quote(amount: rust_decimal::Decimal, status: QuoteStatus) -> Quote {
        Quote {
            id: "q1".to_string(),
            amount,
            materials: Vec::new(),
            valid_until: date(2024, 2, 15),
            notes: String::new(),
            status,
        }
    }

    fn milestone(
        id: &str,
        status: MilestoneStatus,
        completed_at: Option<NaiveDate>,
        payment_due: rust_decimal::Decimal,
        payment_status: MilestonePaymentStatus,
    ) -> Milestone {
        Milestone {
            id: id.to_string(),
            name: format!("Milestone {}", id),
            description: String::new(),
            status,
            completed_at,
            payment_due,
            payment_status,
        }
    }
}
