use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::ValidationError;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#8B0000";
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

/// Process-wide settings: the two access codes and the UI colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub id: Uuid,
    pub admin_code: AccessCode,
    pub user_code: AccessCode,
    pub background_color: ColorCode,
    pub text_color: ColorCode,
    pub created_at: DateTime<Utc>,
}

impl AppConfig {
    pub fn new(admin_code: AccessCode, user_code: AccessCode) -> Self {
        Self {
            id: Uuid::new_v4(),
            admin_code,
            user_code,
            background_color: ColorCode(DEFAULT_BACKGROUND_COLOR.to_owned()),
            text_color: ColorCode(DEFAULT_TEXT_COLOR.to_owned()),
            created_at: Utc::now(),
        }
    }

    /// The admin code wins if both codes happen to be equal.
    pub fn role_for(&self, code: &Secret<String>) -> Option<UserRole> {
        if self.admin_code.matches(code) {
            Some(UserRole::Admin)
        } else if self.user_code.matches(code) {
            Some(UserRole::User)
        } else {
            None
        }
    }

    /// Applies every field present in `update`. Nothing is changed unless
    /// all present fields are valid.
    pub fn apply(&mut self, update: ConfigUpdate) -> Result<(), ValidationError> {
        let admin_code = update.admin_code.map(AccessCode::parse).transpose()?;
        let user_code = update.user_code.map(AccessCode::parse).transpose()?;
        let background_color =
            update.background_color.map(ColorCode::parse).transpose()?;
        let text_color = update.text_color.map(ColorCode::parse).transpose()?;

        if let Some(code) = admin_code {
            self.admin_code = code;
        }
        if let Some(code) = user_code {
            self.user_code = code;
        }
        if let Some(color) = background_color {
            self.background_color = color;
        }
        if let Some(color) = text_color {
            self.text_color = color;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ConfigUpdate {
    pub admin_code: Option<Secret<String>>,
    pub user_code: Option<Secret<String>>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(Debug, Clone)]
pub struct AccessCode(Secret<String>);

impl AccessCode {
    pub fn parse(code: Secret<String>) -> Result<Self, ValidationError> {
        match code.expose_secret().trim().chars().count() {
            x if x < 1 => Err(ValidationError::new(
                "Access code cannot be empty".to_string(),
            )),
            x if x > 64 => Err(ValidationError::new(
                "Max access code length is 64 characters".to_string(),
            )),
            _ => Ok(Self(Secret::new(code.expose_secret().trim().to_owned()))),
        }
    }

    pub fn matches(&self, code: &Secret<String>) -> bool {
        self.0.expose_secret() == code.expose_secret().trim()
    }
}

impl AsRef<Secret<String>> for AccessCode {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for AccessCode {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Serialize for AccessCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for AccessCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self(Secret::new(code)))
    }
}

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Regex for ColorCode is invalid");
}

/// A `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorCode(String);

impl ColorCode {
    pub fn parse(color: String) -> Result<Self, ValidationError> {
        if HEX_COLOR.is_match(&color) {
            Ok(Self(color))
        } else {
            Err(ValidationError::new(format!(
                "Invalid color, expected #RRGGBB: {color}"
            )))
        }
    }
}

impl AsRef<String> for ColorCode {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
