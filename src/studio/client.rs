use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub portal_token: String,
}

impl Client {
    pub fn portal_path(&self) -> String {
        format!("/portal/{}", self.portal_token)
    }
}

/// Body of a client creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewClient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl NewClient {
    /// Builds a request from raw form input, trimming both fields.
    ///
    /// Returns `None` when the name is blank. A blank email is dropped.
    pub fn from_input(name: &str, email: Option<&str>) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let email = email
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from);

        Some(Self {
            name: name.to_string(),
            email,
        })
    }
}
