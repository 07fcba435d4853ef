use async_trait::async_trait;
use biometric_core_db::models::derived_record::attendance_request::AttendanceRequestModel;
use biometric_core_db::repository::create::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::AttendanceRequestRepositoryImpl;

impl AttendanceRequestRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AttendanceRequestRepositoryImpl,
        item: AttendanceRequestModel,
    ) -> Result<AttendanceRequestModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO attendance_request (id, employee_id, from_date, to_date, reason, status, scan_event_id)
            VALUES ($1, $2, $3, $4, $5, $6::attendance_request_status, $7)
            "#,
        )
        .bind(item.id)
        .bind(item.employee_id)
        .bind(item.from_date.as_str())
        .bind(item.to_date.as_str())
        .bind(item.reason.as_str())
        .bind(item.status)
        .bind(item.scan_event_id);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<Postgres, AttendanceRequestModel> for AttendanceRequestRepositoryImpl {
    async fn create(
        &self,
        item: AttendanceRequestModel,
    ) -> Result<AttendanceRequestModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_utils::{create_test_employee, create_test_scan_event};
    use crate::test_helper::setup_test_context;
    use biometric_core_db::models::derived_record::attendance_request::AUTO_CREATED_REASON;
    use biometric_core_db::models::derived_record::common_enums::AttendanceRequestStatus;
    use biometric_core_db::models::derived_record::DerivedRecord;
    use biometric_core_db::repository::create::Create;
    use biometric_core_db::repository::load_batch::LoadBatch;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_attendance_request() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let employee = repos
            .employee_repository
            .create(create_test_employee("Carol", Some("E300")))
            .await?;
        let event = repos
            .scan_event_repository
            .create(create_test_scan_event(Some("E300"), Some("2024-03-01 13:45:00")))
            .await?;
        let date = event.log_datetime.clone().ok_or("log_datetime missing")?;

        let DerivedRecord::AttendanceRequest(request) =
            DerivedRecord::attendance_request(employee.id, &date, event.id)
        else {
            unreachable!()
        };
        repos.attendance_request_repository.create(request.clone()).await?;

        let loaded = repos
            .attendance_request_repository
            .load_batch(&[request.id])
            .await?
            .remove(0)
            .ok_or("attendance request not found")?;
        assert_eq!(loaded.reason.as_str(), AUTO_CREATED_REASON);
        assert_eq!(loaded.status, AttendanceRequestStatus::Open);
        assert_eq!(loaded.from_date, loaded.to_date);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_load_request_moved_on_by_approver() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let employee = repos
            .employee_repository
            .create(create_test_employee("Dana", Some("E301")))
            .await?;
        let event = repos
            .scan_event_repository
            .create(create_test_scan_event(Some("E301"), Some("2024-03-01 08:45:00")))
            .await?;
        let date = event.log_datetime.clone().ok_or("log_datetime missing")?;

        let DerivedRecord::AttendanceRequest(request) =
            DerivedRecord::attendance_request(employee.id, &date, event.id)
        else {
            unreachable!()
        };
        let repo = &repos.attendance_request_repository;
        repo.create(request.clone()).await?;

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("UPDATE attendance_request SET status = 'Approved' WHERE id = $1")
                .bind(request.id)
                .execute(&mut **transaction)
                .await?;
        }

        let found = repo.find_by_scan_event_id(event.id).await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, AttendanceRequestStatus::Approved);

        Ok(())
    }
}
