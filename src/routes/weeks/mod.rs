mod create_week;
mod daily_totals;
mod delete_week;
mod get_week;
mod list_weeks;
mod update_assignments;
mod weekly_summary;

pub use create_week::{create_week, WeekRequest};
pub use daily_totals::get_daily_totals;
pub use delete_week::delete_week;
pub use get_week::get_week;
pub use list_weeks::list_weeks;
pub use update_assignments::update_assignments;
pub use weekly_summary::get_weekly_summary;
