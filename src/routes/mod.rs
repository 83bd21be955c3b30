pub mod config;
pub mod employees;
pub mod guides;
mod login;
pub mod requests;
pub mod weeks;

pub use login::*;

use serde::{Deserialize, Serialize};

/// Body returned by routes that only acknowledge a change.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
