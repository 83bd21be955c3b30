mod create_request;
mod delete_request;
mod list_requests;

pub use create_request::{create_request, DayRequestBody};
pub use delete_request::delete_request;
pub use list_requests::list_requests;
