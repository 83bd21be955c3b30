mod categories;
mod create_guide;
mod delete_guide;
mod list_guides;
mod list_guides_by_category;

pub use categories::list_categories;
pub use create_guide::{create_guide, GuideRequest};
pub use delete_guide::delete_guide;
pub use list_guides::list_guides;
pub use list_guides_by_category::list_guides_by_category;
