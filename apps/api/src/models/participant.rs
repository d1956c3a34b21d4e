use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkPreference {
    Remote,
    Hybrid,
    #[serde(rename = "In-person")]
    InPerson,
    #[serde(rename = "No strong preference")]
    NoPreference,
}

impl WorkPreference {
    pub const ALL: [WorkPreference; 4] = [
        WorkPreference::Remote,
        WorkPreference::Hybrid,
        WorkPreference::InPerson,
        WorkPreference::NoPreference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkPreference::Remote => "Remote",
            WorkPreference::Hybrid => "Hybrid",
            WorkPreference::InPerson => "In-person",
            WorkPreference::NoPreference => "No strong preference",
        }
    }
}

impl FromStr for WorkPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkPreference::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown work_preference '{s}'"))
    }
}

impl fmt::Display for WorkPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SalaryRange {
    #[serde(rename = "Below $50,000")]
    Below50k,
    #[serde(rename = "$50,000 - $75,000")]
    From50kTo75k,
    #[serde(rename = "$75,000 - $100,000")]
    From75kTo100k,
    #[serde(rename = "$100,000 - $150,000")]
    From100kTo150k,
    #[serde(rename = "$150,000+")]
    Above150k,
    #[serde(rename = "I'm flexible")]
    Flexible,
}

impl SalaryRange {
    pub const ALL: [SalaryRange; 6] = [
        SalaryRange::Below50k,
        SalaryRange::From50kTo75k,
        SalaryRange::From75kTo100k,
        SalaryRange::From100kTo150k,
        SalaryRange::Above150k,
        SalaryRange::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryRange::Below50k => "Below $50,000",
            SalaryRange::From50kTo75k => "$50,000 - $75,000",
            SalaryRange::From75kTo100k => "$75,000 - $100,000",
            SalaryRange::From100kTo150k => "$100,000 - $150,000",
            SalaryRange::Above150k => "$150,000+",
            SalaryRange::Flexible => "I'm flexible",
        }
    }
}

impl FromStr for SalaryRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SalaryRange::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown salary_range '{s}'"))
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated participant ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub email: String,
    pub name: String,
    pub zip_code: String,
    pub position: String,
    pub work_preference: WorkPreference,
    pub salary_range: SalaryRange,
}

/// Enumerations are stored as their display strings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct ParticipantRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub zip_code: String,
    pub position: String,
    pub work_preference: String,
    pub salary_range: String,
    pub created_at: DateTime<Utc>,
}
