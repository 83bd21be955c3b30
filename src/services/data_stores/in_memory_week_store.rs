use crate::domain::{Assignments, WeekId, WeekSchedule, WeekStore, WeekStoreError};

#[derive(Default)]
pub struct InMemoryWeekStore {
    weeks: Vec<WeekSchedule>,
}

impl InMemoryWeekStore {
    fn position(&self, week_id: &WeekId) -> Option<usize> {
        self.weeks.iter().position(|w| &w.id == week_id)
    }
}

#[async_trait::async_trait]
impl WeekStore for InMemoryWeekStore {
    async fn list_weeks(&self) -> Result<Vec<WeekSchedule>, WeekStoreError> {
        Ok(self.weeks.clone())
    }

    async fn add_week(
        &mut self,
        week: &WeekSchedule,
    ) -> Result<(), WeekStoreError> {
        if self.position(&week.id).is_some() {
            return Err(WeekStoreError::WeekIDExists);
        }

        self.weeks.push(week.clone());
        Ok(())
    }

    async fn get_week(
        &self,
        week_id: &WeekId,
    ) -> Result<WeekSchedule, WeekStoreError> {
        self.position(week_id)
            .map(|index| self.weeks[index].clone())
            .ok_or(WeekStoreError::WeekNotFound)
    }

    async fn update_assignments(
        &mut self,
        week_id: &WeekId,
        assignments: Assignments,
    ) -> Result<(), WeekStoreError> {
        let index = self
            .position(week_id)
            .ok_or(WeekStoreError::WeekNotFound)?;
        self.weeks[index].merge_assignments(assignments);
        Ok(())
    }

    async fn delete_week(
        &mut self,
        week_id: &WeekId,
    ) -> Result<(), WeekStoreError> {
        let index = self
            .position(week_id)
            .ok_or(WeekStoreError::WeekNotFound)?;
        self.weeks.remove(index);
        Ok(())
    }
}
