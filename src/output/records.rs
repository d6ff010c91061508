//! Table rows for raw AvaTax records

use serde::Serialize;

use super::Tabular;
use crate::avalara::{AccountModel, EntitlementResponse, SecurityRoleModel, UserModel};

impl Tabular for UserModel {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "USERNAME", "NAME", "EMAIL", "ROLE", "ACCOUNT", "ACTIVE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user_name.clone(),
            self.full_name(),
            self.email.clone(),
            self.security_role_id.clone(),
            self.account_id.to_string(),
            self.is_active.to_string(),
        ]
    }
}

impl Tabular for SecurityRoleModel {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.to_string(), self.description.clone()]
    }
}

impl Tabular for AccountModel {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "STATUS", "TYPE", "EFFECTIVE", "END"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.account_status_id.clone(),
            self.account_type_id.clone(),
            self.effective_date.clone().unwrap_or_default(),
            self.end_date.clone().unwrap_or_default(),
        ]
    }
}

/// Permission name as a single-column row
#[derive(Serialize)]
#[serde(transparent)]
pub struct PermissionRow(pub String);

impl Tabular for PermissionRow {
    fn headers() -> Vec<&'static str> {
        vec!["PERMISSION"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.0.clone()]
    }
}

impl Tabular for EntitlementResponse {
    fn headers() -> Vec<&'static str> {
        vec!["ACCESS LEVEL", "COMPANIES", "PERMISSIONS"]
    }

    fn row(&self) -> Vec<String> {
        let companies: Vec<String> = self.companies.iter().map(|c| c.to_string()).collect();
        vec![
            self.access_level.to_string(),
            companies.join(" "),
            self.permissions.join(" "),
        ]
    }
}
