//! Account data models

use serde::{Deserialize, Serialize};

use crate::avalara::nullable::null_as_default;
use crate::avalara::pagination::ListResponse;

/// Account record from the AvaTax accounts endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_status_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_type_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_saml_enabled: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

pub type AccountResponse = ListResponse<AccountModel>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_account() {
        let json = r#"{
            "id": 123456789,
            "name": "Test Account",
            "effectiveDate": "2024-01-01T00:00:00",
            "accountStatusId": "Active",
            "accountTypeId": "Regular",
            "isSamlEnabled": false,
            "isDeleted": false
        }"#;

        let account: AccountModel = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, 123456789);
        assert_eq!(account.name, "Test Account");
        assert_eq!(account.effective_date.as_deref(), Some("2024-01-01T00:00:00"));
        assert!(account.end_date.is_none());
        assert_eq!(account.account_status_id, "Active");
    }

    #[test]
    fn test_null_fields_default() {
        let account: AccountModel = serde_json::from_str(
            r#"{"id": 5, "name": null, "accountStatusId": null, "isSamlEnabled": null}"#,
        )
        .unwrap();
        assert_eq!(account.name, "");
        assert_eq!(account.account_status_id, "");
        assert!(!account.is_saml_enabled);
    }
}
