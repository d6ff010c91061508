//! Security role data models

use serde::{Deserialize, Serialize};

use crate::avalara::nullable::null_as_default;
use crate::avalara::pagination::ListResponse;

/// Security role definition
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRoleModel {
    pub id: i64,
    /// Role name, e.g. `AccountAdmin`; users reference roles by this value
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

pub type SecurityRoleResponse = ListResponse<SecurityRoleModel>;
