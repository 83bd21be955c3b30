mod app_config;
mod data_stores;
mod day_request;
mod employee;
mod employee_id;
mod error;
mod guide;
mod hours;
mod shift;
mod week;

pub use app_config::*;
pub use data_stores::*;
pub use day_request::*;
pub use employee::*;
pub use employee_id::*;
pub use error::*;
pub use guide::*;
pub use hours::*;
pub use shift::*;
pub use week::*;
