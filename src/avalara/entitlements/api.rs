//! User entitlement API operations

use crate::avalara::AvalaraClient;
use crate::config::api;
use crate::error::Result;

use super::models::EntitlementResponse;

impl AvalaraClient {
    /// Get all entitlements of a single user
    pub async fn get_user_entitlements(
        &self,
        account_id: i64,
        user_id: i64,
    ) -> Result<EntitlementResponse> {
        self.get(&api::user_entitlements(account_id, user_id), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avalara::entitlements::AccessLevel;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_user_entitlements() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/123456789/users/12345/entitlements"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "permissions": ["AccountSvc", "CompanySvc"],
                "accessLevel": "SingleAccount",
                "companies": [123, 456]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AvalaraClient::test_client(&mock_server.uri());
        let entitlements = client
            .get_user_entitlements(123456789, 12345)
            .await
            .unwrap();

        assert_eq!(entitlements.permissions, vec!["AccountSvc", "CompanySvc"]);
        assert_eq!(entitlements.access_level, AccessLevel::SingleAccount);
        assert_eq!(entitlements.companies, vec![123, 456]);
    }

    #[tokio::test]
    async fn test_get_user_entitlements_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/1/users/999/entitlements"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {
                    "code": "EntityNotFoundError",
                    "message": "User with id 999 not found"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = AvalaraClient::test_client(&mock_server.uri());
        let err = client.get_user_entitlements(1, 999).await.unwrap_err();
        assert_eq!(err.code(), Some("EntityNotFoundError"));
    }
}
