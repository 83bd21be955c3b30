mod in_memory_config_store;
mod in_memory_day_request_store;
mod in_memory_employee_store;
mod in_memory_guide_store;
mod in_memory_week_store;
mod postgres_config_store;
mod postgres_document_store;

pub use in_memory_config_store::*;
pub use in_memory_day_request_store::*;
pub use in_memory_employee_store::*;
pub use in_memory_guide_store::*;
pub use in_memory_week_store::*;
pub use postgres_config_store::*;
pub use postgres_document_store::*;
