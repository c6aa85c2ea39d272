//! Data structures exchanged with the PORTal backend and persisted in the browser.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{self, MemberId, QualificationId, ReferenceId, RequirementId};

/// Enlisted grades, serialized with the abbreviations the backend stores.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rank {
    #[serde(rename = "AB")]
    AirmanBasic,
    #[serde(rename = "Amn")]
    Airman,
    #[serde(rename = "A1C")]
    AirmanFirstClass,
    #[serde(rename = "SrA")]
    SeniorAirman,
    #[serde(rename = "SSgt")]
    StaffSergeant,
    #[serde(rename = "TSgt")]
    TechnicalSergeant,
    #[serde(rename = "MSgt")]
    MasterSergeant,
    #[serde(rename = "SMSgt")]
    SeniorMasterSergeant,
    #[serde(rename = "CMSgt")]
    ChiefMasterSergeant,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::AirmanBasic => "AB",
            Rank::Airman => "Amn",
            Rank::AirmanFirstClass => "A1C",
            Rank::SeniorAirman => "SrA",
            Rank::StaffSergeant => "SSgt",
            Rank::TechnicalSergeant => "TSgt",
            Rank::MasterSergeant => "MSgt",
            Rank::SeniorMasterSergeant => "SMSgt",
            Rank::ChiefMasterSergeant => "CMSgt",
            Rank::Unknown => "",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portal member as the backend reports it. This is the client's notion of identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    #[serde(default)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub admin: bool,
    #[serde(
        default,
        deserialize_with = "id::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub supervisor_id: Option<MemberId>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub id: ReferenceId,
    pub name: String,
    #[serde(default)]
    pub volume: u32,
    #[serde(default)]
    pub paragraph: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub id: RequirementId,
    pub name: String,
    pub reference: Reference,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default)]
    pub days_valid_for: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Qualification {
    pub id: QualificationId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub initial_requirements: Vec<Requirement>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub recurring_requirements: Vec<Requirement>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default)]
    pub expires: bool,
    #[serde(default)]
    pub expiration_days: u32,
}

/// Body of `POST /api/login`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Keep passwords out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `POST /api/login` payload. Also the shape persisted in local storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub member: Member,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub qualifications: Vec<Qualification>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subordinates: Vec<Member>,
}

/// The backend encodes an empty list as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/validateSession`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionProbe {
    pub id: MemberId,
}
