use serde::{Deserialize, Serialize};

fn missing_label() -> String {
    "none".to_string()
}

/// An event as returned by `GET /events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: u64,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
}

/// A registered team as returned by `GET /events/{id}/teams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: u64,
    /// Display number such as "1234A"
    #[serde(default = "missing_label")]
    pub number: String,
    #[serde(default = "missing_label")]
    pub team_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    Driver,
    Programming,
    /// Any other run type the API reports; ignored by the ranking.
    #[serde(other)]
    Other,
}

/// Id and label of a related resource (team, event) embedded in a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdInfo {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// One skills run result as returned by `GET /teams/{id}/skills`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    pub score: i64,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub team: Option<IdInfo>,
    #[serde(default)]
    pub event: Option<IdInfo>,
}
