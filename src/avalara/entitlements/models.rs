//! User entitlement data models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::avalara::nullable::null_as_default;

/// Breadth of a user's access within AvaTax
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AccessLevel {
    #[default]
    None,
    SingleCompany,
    SingleAccount,
    AllCompanies,
    FirmManagedAccounts,
    /// Level not known to this client, kept verbatim
    Other(String),
}

impl AccessLevel {
    pub fn as_str(&self) -> &str {
        match self {
            AccessLevel::None => "None",
            AccessLevel::SingleCompany => "SingleCompany",
            AccessLevel::SingleAccount => "SingleAccount",
            AccessLevel::AllCompanies => "AllCompanies",
            AccessLevel::FirmManagedAccounts => "FirmManagedAccounts",
            AccessLevel::Other(value) => value,
        }
    }
}

impl From<String> for AccessLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "None" => AccessLevel::None,
            "SingleCompany" => AccessLevel::SingleCompany,
            "SingleAccount" => AccessLevel::SingleAccount,
            "AllCompanies" => AccessLevel::AllCompanies,
            "FirmManagedAccounts" => AccessLevel::FirmManagedAccounts,
            _ => AccessLevel::Other(value),
        }
    }
}

impl From<AccessLevel> for String {
    fn from(level: AccessLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entitlements of a single user (not paginated)
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_level: AccessLevel,
    /// Ids of the companies the user is authorized for
    #[serde(default, deserialize_with = "null_as_default")]
    pub companies: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_entitlements() {
        let json = r#"{
            "permissions": ["AccountSvc", "CompanySvc"],
            "accessLevel": "SingleAccount",
            "companies": [1, 2, 3]
        }"#;

        let entitlements: EntitlementResponse = serde_json::from_str(json).unwrap();
        assert_eq!(entitlements.permissions.len(), 2);
        assert_eq!(entitlements.access_level, AccessLevel::SingleAccount);
        assert_eq!(entitlements.companies, vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_access_level_is_preserved() {
        let entitlements: EntitlementResponse =
            serde_json::from_str(r#"{"accessLevel": "PartnerManaged"}"#).unwrap();
        assert_eq!(
            entitlements.access_level,
            AccessLevel::Other("PartnerManaged".to_string())
        );

        let json = serde_json::to_value(&entitlements).unwrap();
        assert_eq!(json["accessLevel"], "PartnerManaged");
    }

    #[test]
    fn test_missing_access_level_defaults_to_none() {
        let entitlements: EntitlementResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(entitlements.access_level, AccessLevel::None);
        assert_eq!(entitlements.access_level.to_string(), "None");
    }

    #[test]
    fn test_null_fields_default() {
        let entitlements: EntitlementResponse = serde_json::from_str(
            r#"{"permissions": null, "accessLevel": null, "companies": null}"#,
        )
        .unwrap();
        assert_eq!(entitlements, EntitlementResponse::default());
    }
}
