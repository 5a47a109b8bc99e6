use super::lenient::opt_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    #[serde(rename = "phong_ban_id")]
    pub id: String,
    #[serde(rename = "ten_phong_ban", default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(rename = "mo_ta", default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    /// DID of the manager; expected (not guaranteed) to be a member.
    #[serde(rename = "truong_phong_did", default, deserialize_with = "opt_text")]
    pub manager_did: Option<String>,
}

impl Department {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
