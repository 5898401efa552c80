use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_RANKING: u32 = 999;

fn default_ranking() -> u32 {
    DEFAULT_INITIAL_RANKING
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: String,
    pub client_name: String,
    /// Lower is higher priority.
    #[serde(default = "default_ranking")]
    pub initial_ranking: u32,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub agency_id: String,
    pub agency_name: String,
    #[serde(default = "default_ranking")]
    pub initial_ranking: u32,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub client_id: Option<String>,
    pub client_name: String,
    pub initial_ranking: Option<u32>,
    pub memo: Option<String>,
}
