use color_eyre::eyre::eyre;
use sqlx::{types::Json, PgPool};

use crate::domain::{
    Assignments, DayRequest, DayRequestId, DayRequestStore,
    DayRequestStoreError, Employee, EmployeeId, EmployeeStore,
    EmployeeStoreError, Guide, GuideCategory, GuideId, GuideStore,
    GuideStoreError, WeekId, WeekSchedule, WeekStore, WeekStoreError,
};

/// Keeps every record as a JSONB document, one table per collection. The
/// same pool backs all four collections, so the store is cheap to clone
/// into each slot of the app state.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl EmployeeStore for PostgresDocumentStore {
    #[tracing::instrument(name = "Listing employees from PostgreSQL", skip_all)]
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeStoreError> {
        let rows = sqlx::query_as::<_, (Json<Employee>,)>(
            r#"
            SELECT document FROM employees ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EmployeeStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows.into_iter().map(|(Json(employee),)| employee).collect())
    }

    #[tracing::instrument(name = "Adding employee to PostgreSQL", skip_all)]
    async fn add_employee(
        &mut self,
        employee: &Employee,
    ) -> Result<(), EmployeeStoreError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, document) VALUES ($1, $2)
            "#,
        )
        .bind(*employee.id.as_ref())
        .bind(Json(employee))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                EmployeeStoreError::EmployeeIDExists
            }
            e => EmployeeStoreError::UnexpectedError(eyre!(e)),
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Getting employee from PostgreSQL", skip_all)]
    async fn get_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Employee, EmployeeStoreError> {
        sqlx::query_as::<_, (Json<Employee>,)>(
            r#"
            SELECT document FROM employees WHERE id = $1
            "#,
        )
        .bind(*employee_id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeStoreError::UnexpectedError(eyre!(e)))?
        .map(|(Json(employee),)| employee)
        .ok_or(EmployeeStoreError::EmployeeNotFound)
    }

    #[tracing::instrument(name = "Updating employee in PostgreSQL", skip_all)]
    async fn update_employee(
        &mut self,
        employee: &Employee,
    ) -> Result<(), EmployeeStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET document = $2 WHERE id = $1
            "#,
        )
        .bind(*employee.id.as_ref())
        .bind(Json(employee))
        .execute(&self.pool)
        .await
        .map_err(|e| EmployeeStoreError::UnexpectedError(eyre!(e)))?;

        match result.rows_affected() {
            0 => Err(EmployeeStoreError::EmployeeNotFound),
            _ => Ok(()),
        }
    }

    #[tracing::instrument(name = "Deleting employee from PostgreSQL", skip_all)]
    async fn delete_employee(
        &mut self,
        employee_id: &EmployeeId,
    ) -> Result<(), EmployeeStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees WHERE id = $1
            "#,
        )
        .bind(*employee_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| EmployeeStoreError::UnexpectedError(eyre!(e)))?;

        match result.rows_affected() {
            0 => Err(EmployeeStoreError::EmployeeNotFound),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl WeekStore for PostgresDocumentStore {
    #[tracing::instrument(name = "Listing weeks from PostgreSQL", skip_all)]
    async fn list_weeks(&self) -> Result<Vec<WeekSchedule>, WeekStoreError> {
        let rows = sqlx::query_as::<_, (Json<WeekSchedule>,)>(
            r#"
            SELECT document FROM weeks ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| WeekStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows.into_iter().map(|(Json(week),)| week).collect())
    }

    #[tracing::instrument(name = "Adding week to PostgreSQL", skip_all)]
    async fn add_week(
        &mut self,
        week: &WeekSchedule,
    ) -> Result<(), WeekStoreError> {
        sqlx::query(
            r#"
            INSERT INTO weeks (id, document) VALUES ($1, $2)
            "#,
        )
        .bind(*week.id.as_ref())
        .bind(Json(week))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                WeekStoreError::WeekIDExists
            }
            e => WeekStoreError::UnexpectedError(eyre!(e)),
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Getting week from PostgreSQL", skip_all)]
    async fn get_week(
        &self,
        week_id: &WeekId,
    ) -> Result<WeekSchedule, WeekStoreError> {
        sqlx::query_as::<_, (Json<WeekSchedule>,)>(
            r#"
            SELECT document FROM weeks WHERE id = $1
            "#,
        )
        .bind(*week_id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| WeekStoreError::UnexpectedError(eyre!(e)))?
        .map(|(Json(week),)| week)
        .ok_or(WeekStoreError::WeekNotFound)
    }

    // `||` on two JSONB objects replaces top-level keys, which gives the
    // per-employee merge without a read-modify-write round trip.
    #[tracing::instrument(name = "Updating week assignments in PostgreSQL", skip_all)]
    async fn update_assignments(
        &mut self,
        week_id: &WeekId,
        assignments: Assignments,
    ) -> Result<(), WeekStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE weeks
            SET document = jsonb_set(
                document,
                '{orari}',
                COALESCE(document->'orari', '{}'::jsonb) || $2
            )
            WHERE id = $1
            "#,
        )
        .bind(*week_id.as_ref())
        .bind(Json(&assignments))
        .execute(&self.pool)
        .await
        .map_err(|e| WeekStoreError::UnexpectedError(eyre!(e)))?;

        match result.rows_affected() {
            0 => Err(WeekStoreError::WeekNotFound),
            _ => Ok(()),
        }
    }

    #[tracing::instrument(name = "Deleting week from PostgreSQL", skip_all)]
    async fn delete_week(
        &mut self,
        week_id: &WeekId,
    ) -> Result<(), WeekStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM weeks WHERE id = $1
            "#,
        )
        .bind(*week_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| WeekStoreError::UnexpectedError(eyre!(e)))?;

        match result.rows_affected() {
            0 => Err(WeekStoreError::WeekNotFound),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl DayRequestStore for PostgresDocumentStore {
    #[tracing::instrument(name = "Listing day requests from PostgreSQL", skip_all)]
    async fn list_requests(&self) -> Result<Vec<DayRequest>, DayRequestStoreError> {
        let rows = sqlx::query_as::<_, (Json<DayRequest>,)>(
            r#"
            SELECT document FROM day_requests ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DayRequestStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows.into_iter().map(|(Json(request),)| request).collect())
    }

    #[tracing::instrument(name = "Adding day request to PostgreSQL", skip_all)]
    async fn add_request(
        &mut self,
        request: &DayRequest,
    ) -> Result<(), DayRequestStoreError> {
        sqlx::query(
            r#"
            INSERT INTO day_requests (id, document) VALUES ($1, $2)
            "#,
        )
        .bind(*request.id.as_ref())
        .bind(Json(request))
        .execute(&self.pool)
        .await
        .map_err(|e| DayRequestStoreError::UnexpectedError(eyre!(e)))?;
        Ok(())
    }

    #[tracing::instrument(name = "Deleting day request from PostgreSQL", skip_all)]
    async fn delete_request(
        &mut self,
        request_id: &DayRequestId,
    ) -> Result<(), DayRequestStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM day_requests WHERE id = $1
            "#,
        )
        .bind(*request_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| DayRequestStoreError::UnexpectedError(eyre!(e)))?;

        match result.rows_affected() {
            0 => Err(DayRequestStoreError::RequestNotFound),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl GuideStore for PostgresDocumentStore {
    #[tracing::instrument(name = "Listing guides from PostgreSQL", skip_all)]
    async fn list_guides(&self) -> Result<Vec<Guide>, GuideStoreError> {
        let rows = sqlx::query_as::<_, (Json<Guide>,)>(
            r#"
            SELECT document FROM guides ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GuideStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows.into_iter().map(|(Json(guide),)| guide).collect())
    }

    #[tracing::instrument(name = "Listing guides by category from PostgreSQL", skip_all)]
    async fn list_guides_by_category(
        &self,
        category: GuideCategory,
    ) -> Result<Vec<Guide>, GuideStoreError> {
        let rows = sqlx::query_as::<_, (Json<Guide>,)>(
            r#"
            SELECT document FROM guides
            WHERE document->>'categoria' = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(category.key())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GuideStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows.into_iter().map(|(Json(guide),)| guide).collect())
    }

    #[tracing::instrument(name = "Adding guide to PostgreSQL", skip_all)]
    async fn add_guide(&mut self, guide: &Guide) -> Result<(), GuideStoreError> {
        sqlx::query(
            r#"
            INSERT INTO guides (id, document) VALUES ($1, $2)
            "#,
        )
        .bind(*guide.id.as_ref())
        .bind(Json(guide))
        .execute(&self.pool)
        .await
        .map_err(|e| GuideStoreError::UnexpectedError(eyre!(e)))?;
        Ok(())
    }

    #[tracing::instrument(name = "Deleting guide from PostgreSQL", skip_all)]
    async fn delete_guide(
        &mut self,
        guide_id: &GuideId,
    ) -> Result<(), GuideStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM guides WHERE id = $1
            "#,
        )
        .bind(*guide_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| GuideStoreError::UnexpectedError(eyre!(e)))?;

        match result.rows_affected() {
            0 => Err(GuideStoreError::GuideNotFound),
            _ => Ok(()),
        }
    }
}
