use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Kinds of entities users can vote on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VotableType {
    Company,
    School,
    Skill,
    ProgrammingLanguage,
    Certification,
    Book,
}

impl VotableType {
    /// All variants in declaration order.
    pub const ALL: [VotableType; 6] = [
        VotableType::Company,
        VotableType::School,
        VotableType::Skill,
        VotableType::ProgrammingLanguage,
        VotableType::Certification,
        VotableType::Book,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VotableType::Company => "COMPANY",
            VotableType::School => "SCHOOL",
            VotableType::Skill => "SKILL",
            VotableType::ProgrammingLanguage => "PROGRAMMING_LANGUAGE",
            VotableType::Certification => "CERTIFICATION",
            VotableType::Book => "BOOK",
        }
    }
}

impl FromStr for VotableType {
    type Err = String;

    /// Parses the exact wire name; seed files must match the enumeration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Invalid VotableType: {s}"))
    }
}

impl fmt::Display for VotableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One record of the votables seed file.
///
/// `type` stays a plain string here so that an unknown value surfaces as an
/// enumeration error for that record rather than a parse error for the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VotableSeed {
    #[serde(rename = "type")]
    pub votable_type: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub prestige_score: Option<i64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub registered_user_votes: Option<i64>,
    #[serde(default)]
    pub guest_votes: Option<i64>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A stored votable entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Votable {
    pub id: u64,
    pub votable_type: VotableType,
    pub name: String,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub prestige_score: i64,
    pub vote_count: i64,
    pub registered_user_votes: i64,
    pub guest_votes: i64,
    pub website: Option<String>,
    pub created_at: Timestamp,
}
