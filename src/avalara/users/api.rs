//! User API operations

use crate::avalara::pagination::PaginationOptions;
use crate::avalara::AvalaraClient;
use crate::config::api;
use crate::error::Result;

use super::models::UserResponse;

impl AvalaraClient {
    /// Get one page of users visible to the authenticated user
    pub async fn get_users(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<(UserResponse, Option<PaginationOptions>)> {
        self.get_page(api::USERS, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avalara::pagination::PaginatedResponse;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_users() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .and(query_param("$top", "2"))
            .and(query_param("$filter", "lastName startsWith \"Ex\""))
            .and(query_param("$orderby", "id DESC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "@recordsetCount": 2,
                "value": [
                    {
                        "id": 2,
                        "accountId": 100,
                        "userName": "alice",
                        "lastName": "Example",
                        "securityRoleId": "AccountAdmin",
                        "isActive": true
                    },
                    {
                        "id": 1,
                        "accountId": 100,
                        "userName": "bob",
                        "lastName": "Exemplar",
                        "securityRoleId": "AccountUser",
                        "isActive": false
                    }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AvalaraClient::test_client(&mock_server.uri());
        let options = PaginationOptions {
            top: 2,
            filter: Some("lastName startsWith \"Ex\"".to_string()),
            order_by: Some("id DESC".to_string()),
            ..PaginationOptions::default()
        };
        let (users, next) = client.get_users(Some(&options)).await.unwrap();

        assert!(next.is_none());
        let users = users.into_items();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user_name, "alice");
        assert_eq!(users[1].security_role_id, "AccountUser");
        assert!(!users[1].is_active);
    }

    #[tokio::test]
    async fn test_get_users_follows_next_link() {
        let mock_server = MockServer::start().await;
        let next_link = format!("{}/api/v2/users?$skip=1&$top=1", mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .and(query_param("$skip", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "@recordsetCount": 2,
                "value": [{"id": 2, "userName": "second"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .and(query_param("$top", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "@recordsetCount": 2,
                "value": [{"id": 1, "userName": "first"}],
                "@nextLink": next_link
            })))
            .mount(&mock_server)
            .await;

        let client = AvalaraClient::test_client(&mock_server.uri());
        let (first, next) = client
            .get_users(Some(&PaginationOptions::with_top(1)))
            .await
            .unwrap();
        assert_eq!(first.value[0].user_name, "first");

        let next = next.expect("expected a next page");
        assert_eq!(next.next_link(), Some(next_link.as_str()));

        let (second, done) = client.get_users(Some(&next)).await.unwrap();
        assert_eq!(second.value[0].user_name, "second");
        assert!(done.is_none());
    }
}
