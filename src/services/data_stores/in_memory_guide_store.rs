use crate::domain::{Guide, GuideCategory, GuideId, GuideStore, GuideStoreError};

#[derive(Default)]
pub struct InMemoryGuideStore {
    guides: Vec<Guide>,
}

#[async_trait::async_trait]
impl GuideStore for InMemoryGuideStore {
    async fn list_guides(&self) -> Result<Vec<Guide>, GuideStoreError> {
        Ok(self.guides.clone())
    }

    async fn list_guides_by_category(
        &self,
        category: GuideCategory,
    ) -> Result<Vec<Guide>, GuideStoreError> {
        Ok(self
            .guides
            .iter()
            .filter(|guide| guide.category == category)
            .cloned()
            .collect())
    }

    async fn add_guide(&mut self, guide: &Guide) -> Result<(), GuideStoreError> {
        self.guides.push(guide.clone());
        Ok(())
    }

    async fn delete_guide(
        &mut self,
        guide_id: &GuideId,
    ) -> Result<(), GuideStoreError> {
        let index = self
            .guides
            .iter()
            .position(|g| &g.id == guide_id)
            .ok_or(GuideStoreError::GuideNotFound)?;
        self.guides.remove(index);
        Ok(())
    }
}
