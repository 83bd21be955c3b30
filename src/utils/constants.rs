use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_URL: Option<Secret<String>> = get_db_url();
    pub static ref CORS_ORIGINS: Vec<String> = set_cors_origins();
    pub static ref APP_ADDRESS: String =
        load_or_default(env::APP_ADDRESS_ENV_VAR, prod::APP_ADDRESS);
    pub static ref DEFAULT_ADMIN_CODE: Secret<String> = Secret::new(
        load_or_default(env::DEFAULT_ADMIN_CODE_ENV_VAR, DEFAULT_ADMIN_CODE_VALUE)
    );
    pub static ref DEFAULT_USER_CODE: Secret<String> = Secret::new(
        load_or_default(env::DEFAULT_USER_CODE_ENV_VAR, DEFAULT_USER_CODE_VALUE)
    );
}

fn load_env() {
    dotenv().ok();
}

/// An unset or empty `DATABASE_URL` selects the in-memory stores.
fn get_db_url() -> Option<Secret<String>> {
    load_env();
    std_env::var(env::DATABASE_URL_ENV_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .map(Secret::new)
}

fn set_cors_origins() -> Vec<String> {
    parse_origins(&load_or_default(env::CORS_ORIGINS_ENV_VAR, ANY_ORIGIN))
}

fn parse_origins(value: &str) -> Vec<String> {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect();
    if origins.is_empty() {
        vec![ANY_ORIGIN.to_owned()]
    } else {
        origins
    }
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const CORS_ORIGINS_ENV_VAR: &str = "CORS_ORIGINS";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const DEFAULT_ADMIN_CODE_ENV_VAR: &str = "DEFAULT_ADMIN_CODE";
    pub const DEFAULT_USER_CODE_ENV_VAR: &str = "DEFAULT_USER_CODE";
}

pub const ANY_ORIGIN: &str = "*";
pub const DEFAULT_ADMIN_CODE_VALUE: &str = "555";
pub const DEFAULT_USER_CODE_VALUE: &str = "999";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
