use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// An operational how-to for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: GuideId,
    #[serde(rename = "titolo")]
    pub title: String,
    #[serde(rename = "contenuto")]
    pub content: String,
    #[serde(rename = "categoria")]
    pub category: GuideCategory,
    pub created_at: DateTime<Utc>,
}

impl Guide {
    pub fn new(title: String, content: String, category: GuideCategory) -> Self {
        Self {
            id: GuideId::default(),
            title,
            content,
            category,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideCategory {
    CondottaGenerale,
    RepartoCassa,
    RepartoFreschi,
    RepartoGastronomia,
    RepartoMacelleria,
    RepartoOrtofrutta,
    RepartoSala,
    RepartoSurgelati,
    RepartoMagazzino,
}

impl GuideCategory {
    pub const ALL: [GuideCategory; 9] = [
        GuideCategory::CondottaGenerale,
        GuideCategory::RepartoCassa,
        GuideCategory::RepartoFreschi,
        GuideCategory::RepartoGastronomia,
        GuideCategory::RepartoMacelleria,
        GuideCategory::RepartoOrtofrutta,
        GuideCategory::RepartoSala,
        GuideCategory::RepartoSurgelati,
        GuideCategory::RepartoMagazzino,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GuideCategory::CondottaGenerale => "condotta_generale",
            GuideCategory::RepartoCassa => "reparto_cassa",
            GuideCategory::RepartoFreschi => "reparto_freschi",
            GuideCategory::RepartoGastronomia => "reparto_gastronomia",
            GuideCategory::RepartoMacelleria => "reparto_macelleria",
            GuideCategory::RepartoOrtofrutta => "reparto_ortofrutta",
            GuideCategory::RepartoSala => "reparto_sala",
            GuideCategory::RepartoSurgelati => "reparto_surgelati",
            GuideCategory::RepartoMagazzino => "reparto_magazzino",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuideCategory::CondottaGenerale => "Condotta Generale",
            GuideCategory::RepartoCassa => "Reparto Cassa",
            GuideCategory::RepartoFreschi => "Reparto Freschi",
            GuideCategory::RepartoGastronomia => "Reparto Gastronomia",
            GuideCategory::RepartoMacelleria => "Reparto Macelleria",
            GuideCategory::RepartoOrtofrutta => "Reparto Ortofrutta",
            GuideCategory::RepartoSala => "Reparto Sala",
            GuideCategory::RepartoSurgelati => "Reparto Surgelati",
            GuideCategory::RepartoMagazzino => "Reparto Magazzino",
        }
    }
}

impl FromStr for GuideCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuideCategory::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| {
                ValidationError::new(format!("Invalid guide category: {s}"))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuideId(Uuid);

impl GuideId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for GuideId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl AsRef<Uuid> for GuideId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}
