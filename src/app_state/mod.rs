use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    ConfigStore, DayRequestStore, EmployeeStore, GuideStore, WeekStore,
};
pub type EmployeeStoreType = Arc<RwLock<dyn EmployeeStore + Send + Sync>>;
pub type WeekStoreType = Arc<RwLock<dyn WeekStore + Send + Sync>>;
pub type DayRequestStoreType = Arc<RwLock<dyn DayRequestStore + Send + Sync>>;
pub type GuideStoreType = Arc<RwLock<dyn GuideStore + Send + Sync>>;
pub type ConfigStoreType = Arc<RwLock<dyn ConfigStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub employee_store: EmployeeStoreType,
    pub week_store: WeekStoreType,
    pub day_request_store: DayRequestStoreType,
    pub guide_store: GuideStoreType,
    pub config_store: ConfigStoreType,
}

impl AppState {
    pub fn new(
        employee_store: EmployeeStoreType,
        week_store: WeekStoreType,
        day_request_store: DayRequestStoreType,
        guide_store: GuideStoreType,
        config_store: ConfigStoreType,
    ) -> Self {
        Self {
            employee_store,
            week_store,
            day_request_store,
            guide_store,
            config_store,
        }
    }
}
