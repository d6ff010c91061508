//! Ping response model

use serde::{Deserialize, Serialize};

/// Response of the ping (health check) endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub authentication_type: Option<String>,
    #[serde(default)]
    pub authenticated_user_name: Option<String>,
    #[serde(default)]
    pub authenticated_user_id: Option<i64>,
    #[serde(default)]
    pub authenticated_account_id: Option<i64>,
    #[serde(default)]
    pub authenticated_company_id: Option<i64>,
    #[serde(rename = "crmid", default)]
    pub crm_id: Option<String>,
}
