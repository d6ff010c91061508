//! User data models

use serde::{Deserialize, Serialize};

use crate::avalara::nullable::null_as_default;
use crate::avalara::pagination::ListResponse;

/// User record from the AvaTax users endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_id: i64,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    /// Name of the assigned security role, e.g. `AccountUser`
    #[serde(default, deserialize_with = "null_as_default")]
    pub security_role_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password_status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suppress_new_user_email: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_deleted: bool,
}

impl UserModel {
    /// Full name, falling back to the user name
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.user_name.clone()
        } else {
            name.to_string()
        }
    }
}

pub type UserResponse = ListResponse<UserModel>;
