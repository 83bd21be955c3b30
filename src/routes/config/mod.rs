mod get_config;
mod update_config;

pub use get_config::get_config;
pub use update_config::update_config;
