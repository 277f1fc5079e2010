//! Closed vocabularies shared by the entities
//!
//! Every enum round-trips through its snake_case wire form, both in JSON and
//! in the database, so `as_str`/`FromStr` are the single source of truth.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a stored or submitted enum value is not recognized
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("invalid {kind} value: {value}")]
pub struct KindParseError {
    pub kind: &'static str,
    pub value: String,
}

impl KindParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Disaster category a portal or manual is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterType {
    Flood,
    Earthquake,
    Cyclone,
    Drought,
    Fire,
    Landslide,
    Tsunami,
    Chemical,
    Biological,
    Nuclear,
    Other,
}

impl DisasterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Earthquake => "earthquake",
            Self::Cyclone => "cyclone",
            Self::Drought => "drought",
            Self::Fire => "fire",
            Self::Landslide => "landslide",
            Self::Tsunami => "tsunami",
            Self::Chemical => "chemical",
            Self::Biological => "biological",
            Self::Nuclear => "nuclear",
            Self::Other => "other",
        }
    }

    /// Human-readable label with the first letter upper-cased, used when
    /// synthesizing default manual titles ("Flood Safety Guide")
    pub fn display_name(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisasterType {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flood" => Ok(Self::Flood),
            "earthquake" => Ok(Self::Earthquake),
            "cyclone" => Ok(Self::Cyclone),
            "drought" => Ok(Self::Drought),
            "fire" => Ok(Self::Fire),
            "landslide" => Ok(Self::Landslide),
            "tsunami" => Ok(Self::Tsunami),
            "chemical" => Ok(Self::Chemical),
            "biological" => Ok(Self::Biological),
            "nuclear" => Ok(Self::Nuclear),
            "other" => Ok(Self::Other),
            other => Err(KindParseError::new("disaster_type", other)),
        }
    }
}

/// Portal urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(KindParseError::new("urgency", other)),
        }
    }
}

/// Portal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalStatus {
    Active,
    Inactive,
    Resolved,
}

impl PortalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for PortalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortalStatus {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "resolved" => Ok(Self::Resolved),
            other => Err(KindParseError::new("portal_status", other)),
        }
    }
}

/// Resource need category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Medicine,
    Food,
    Shelter,
    Clothing,
    Water,
    Transport,
    Other,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medicine => "medicine",
            Self::Food => "food",
            Self::Shelter => "shelter",
            Self::Clothing => "clothing",
            Self::Water => "water",
            Self::Transport => "transport",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "medicine" => Ok(Self::Medicine),
            "food" => Ok(Self::Food),
            "shelter" => Ok(Self::Shelter),
            "clothing" => Ok(Self::Clothing),
            "water" => Ok(Self::Water),
            "transport" => Ok(Self::Transport),
            "other" => Ok(Self::Other),
            other => Err(KindParseError::new("resource_category", other)),
        }
    }
}

/// Fulfillment status of a resource need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Needed,
    PartiallyFulfilled,
    Fulfilled,
}

impl ResourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Needed => "needed",
            Self::PartiallyFulfilled => "partially_fulfilled",
            Self::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceStatus {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "needed" => Ok(Self::Needed),
            "partially_fulfilled" => Ok(Self::PartiallyFulfilled),
            "fulfilled" => Ok(Self::Fulfilled),
            other => Err(KindParseError::new("resource_status", other)),
        }
    }
}

/// Resource need priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Numeric rank used for descending sort (high first)
    pub fn rank(&self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(KindParseError::new("priority", other)),
        }
    }
}

/// Forum post category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForumCategory {
    General,
    Question,
    Resource,
    Update,
    Other,
}

impl ForumCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Question => "question",
            Self::Resource => "resource",
            Self::Update => "update",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ForumCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForumCategory {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "question" => Ok(Self::Question),
            "resource" => Ok(Self::Resource),
            "update" => Ok(Self::Update),
            "other" => Ok(Self::Other),
            other => Err(KindParseError::new("forum_category", other)),
        }
    }
}

/// Volunteer registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VolunteerStatus {
    #[default]
    Active,
    Inactive,
}

impl VolunteerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolunteerStatus {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(KindParseError::new("volunteer_status", other)),
        }
    }
}
