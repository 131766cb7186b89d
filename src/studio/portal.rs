use serde::{Deserialize, Serialize};

/// Read-only view of one client, fetched by portal token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPortal {
    pub id: i64,
    pub name: String,
    pub protection_level: ProtectionLevel,
    #[serde(default)]
    pub shoots: Vec<PortalShoot>,
    #[serde(default)]
    pub galleries: Vec<Gallery>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtectionLevel {
    None,
    Partial,
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalShoot {
    pub id: i64,
    pub title: String,
    /// RFC 3339 timestamp as sent by the API.
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: i64,
    pub title: String,
    pub delivered: bool,
    #[serde(default)]
    pub url: Option<String>,
}
