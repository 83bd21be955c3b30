use crate::domain::{DayRequest, DayRequestId, DayRequestStore, DayRequestStoreError};

#[derive(Default)]
pub struct InMemoryDayRequestStore {
    requests: Vec<DayRequest>,
}

#[async_trait::async_trait]
impl DayRequestStore for InMemoryDayRequestStore {
    async fn list_requests(&self) -> Result<Vec<DayRequest>, DayRequestStoreError> {
        Ok(self.requests.clone())
    }

    async fn add_request(
        &mut self,
        request: &DayRequest,
    ) -> Result<(), DayRequestStoreError> {
        self.requests.push(request.clone());
        Ok(())
    }

    async fn delete_request(
        &mut self,
        request_id: &DayRequestId,
    ) -> Result<(), DayRequestStoreError> {
        let index = self
            .requests
            .iter()
            .position(|r| &r.id == request_id)
            .ok_or(DayRequestStoreError::RequestNotFound)?;
        self.requests.remove(index);
        Ok(())
    }
}
