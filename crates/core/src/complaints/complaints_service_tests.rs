//! Tests for the complaint service.

#[cfg(test)]
mod tests {
    use crate::complaints::{
        Complaint, ComplaintError, ComplaintPriority, ComplaintRepositoryTrait, ComplaintService,
        ComplaintServiceTrait, ComplaintStatus, NewComplaint, Warranty, WarrantyRepositoryTrait,
        WarrantyStatus,
    };
    use crate::errors::Result;
    use crate::Error;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockComplaintRepository {
        complaints: Arc<Mutex<Vec<Complaint>>>,
    }

    #[async_trait]
    impl ComplaintRepositoryTrait for MockComplaintRepository {
        fn list(&self) -> Result<Vec<Complaint>> {
            Ok(self.complaints.lock().unwrap().clone())
        }

        async fn create(&self, complaint: Complaint) -> Result<Complaint> {
            self.complaints.lock().unwrap().push(complaint.clone());
            Ok(complaint)
        }
    }

    #[derive(Clone, Default)]
    struct MockWarrantyRepository {
        warranties: Arc<Mutex<Vec<Warranty>>>,
    }

    impl WarrantyRepositoryTrait for MockWarrantyRepository {
        fn list(&self) -> Result<Vec<Warranty>> {
            Ok(self.warranties.lock().unwrap().clone())
        }
    }

    fn service() -> (ComplaintService, MockComplaintRepository, MockWarrantyRepository) {
        let complaints = MockComplaintRepository::default();
        let warranties = MockWarrantyRepository::default();
        (
            ComplaintService::new(Arc::new(complaints.clone()), Arc::new(warranties.clone())),
            complaints,
            warranties,
        )
    }

    #[tokio::test]
    async fn test_submit_complaint_starts_pending_with_fresh_id() {
        let (service, repo, _) = service();

        let complaint = service
            .submit_complaint(NewComplaint {
                title: "Grout color mismatch".to_string(),
                description: "The grout color does not match what was agreed upon".to_string(),
                project: "Kitchen Backsplash".to_string(),
                priority: Some(ComplaintPriority::Medium),
            })
            .await
            .unwrap();

        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert!(!complaint.id.is_empty());
        assert_eq!(repo.list().unwrap(), vec![complaint]);
    }

    #[tokio::test]
    async fn test_submit_complaint_requires_project_reference() {
        let (service, repo, _) = service();

        let err = service
            .submit_complaint(NewComplaint {
                title: "Tile alignment issue".to_string(),
                description: "Some tiles are not properly aligned".to_string(),
                project: "  ".to_string(),
                priority: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Complaint(ComplaintError::InvalidData(_))
        ));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_get_warranties_reads_through() {
        let (service, _, warranties) = service();
        warranties.warranties.lock().unwrap().push(Warranty {
            id: "WAR001".to_string(),
            project: "Bathroom Renovation".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            status: WarrantyStatus::Active,
            coverage: "Full material and workmanship warranty".to_string(),
            terms: "Covers defects for 2 years from completion".to_string(),
        });

        let listed = service.get_warranties().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, WarrantyStatus::Active);
    }

    #[test]
    fn test_complaint_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(ComplaintStatus::Resolved.as_str(), "resolved");
    }
}
