mod create_employee;
mod delete_employee;
mod list_employees;
mod update_employee;

pub use create_employee::{create_employee, EmployeeRequest};
pub use delete_employee::delete_employee;
pub use list_employees::list_employees;
pub use update_employee::update_employee;
