//! User syncer

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::avalara::{AvalaraClient, PaginatedResponse, PaginationOptions, UserModel};
use crate::config::api;
use crate::error::Result;

use super::resource::{
    Email, Entitlement, Grant, Profile, Resource, ResourceId, ResourceType, UserStatus, UserTrait,
};
use super::resource_types;
use super::syncer::{Page, ResourceSyncer};

/// Lists AvaTax users as user resources
pub struct UserSyncer {
    client: Arc<AvalaraClient>,
}

impl UserSyncer {
    pub fn new(client: Arc<AvalaraClient>) -> Self {
        Self { client }
    }
}

/// Profile copied from the upstream user record
fn user_profile(user: &UserModel) -> Profile {
    let entries: [(&str, serde_json::Value); 10] = [
        ("id", user.id.into()),
        ("firstName", user.first_name.clone().into()),
        ("lastName", user.last_name.clone().into()),
        ("email", user.email.clone().into()),
        ("userName", user.user_name.clone().into()),
        ("accountId", user.account_id.into()),
        ("companyId", user.company_id.into()),
        ("isActive", user.is_active.into()),
        ("suppressNewUserEmail", user.suppress_new_user_email.into()),
        ("isDeleted", user.is_deleted.into()),
    ];
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Map an upstream user to a user resource
pub fn user_resource(user: &UserModel, parent: Option<&ResourceId>) -> Result<Resource> {
    let status = if user.is_active {
        UserStatus::Enabled
    } else {
        UserStatus::Disabled
    };

    let emails = if user.email.is_empty() {
        Vec::new()
    } else {
        vec![Email {
            address: user.email.clone(),
            is_primary: true,
        }]
    };

    Resource::user(
        user.user_name.clone(),
        &resource_types::USER,
        user.id.to_string(),
        UserTrait {
            profile: user_profile(user),
            status,
            login: user.user_name.clone(),
            emails,
        },
        parent,
    )
}

#[async_trait]
impl ResourceSyncer for UserSyncer {
    fn resource_type(&self) -> &'static ResourceType {
        &resource_types::USER
    }

    async fn list(&self, parent: Option<&ResourceId>, token: &str) -> Result<Page<Resource>> {
        let options = PaginationOptions::resume(api::DEFAULT_PAGE_SIZE, token);

        let (response, next) = self
            .client
            .get_users(Some(&options))
            .await
            .map_err(|e| e.context("failed to list users"))?;

        let users = response.into_items();
        debug!("Mapping {} users", users.len());

        let resources = users
            .iter()
            .map(|user| user_resource(user, parent))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.context("failed to create user resource"))?;

        let next_token = next.and_then(|o| o.next_link).unwrap_or_default();
        Ok(Page::new(resources, next_token))
    }

    /// Users expose no entitlements of their own
    async fn entitlements(&self, _resource: &Resource, _token: &str) -> Result<Page<Entitlement>> {
        Ok(Page::empty())
    }

    /// Users hold grants but are never the granting resource
    async fn grants(&self, _resource: &Resource, _token: &str) -> Result<Page<Grant>> {
        Ok(Page::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::resource::Traits;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_user(id: i64, active: bool) -> UserModel {
        UserModel {
            id,
            account_id: 100,
            company_id: Some(7),
            user_name: format!("user{}", id),
            first_name: "Bob".to_string(),
            last_name: "Example".to_string(),
            email: format!("user{}@example.org", id),
            security_role_id: "AccountUser".to_string(),
            is_active: active,
            ..UserModel::default()
        }
    }

    #[test]
    fn test_user_resource_mapping() {
        let resource = user_resource(&sample_user(12, true), None).unwrap();

        assert_eq!(resource.id.to_string(), "user:12");
        assert_eq!(resource.display_name, "user12");
        assert!(resource.parent_resource_id.is_none());

        let Traits::User(user) = &resource.traits else {
            panic!("expected user trait");
        };
        assert_eq!(user.status, UserStatus::Enabled);
        assert_eq!(user.login, "user12");
        assert_eq!(user.emails[0].address, "user12@example.org");
        assert!(user.emails[0].is_primary);
        assert_eq!(user.profile["id"], 12);
        assert_eq!(user.profile["accountId"], 100);
        assert_eq!(user.profile["companyId"], 7);
        assert_eq!(user.profile["isDeleted"], false);
    }

    #[test]
    fn test_inactive_user_is_disabled() {
        let resource = user_resource(&sample_user(3, false), None).unwrap();
        let Traits::User(user) = &resource.traits else {
            panic!("expected user trait");
        };
        assert_eq!(user.status, UserStatus::Disabled);
    }

    #[test]
    fn test_user_without_email_or_company() {
        let user = UserModel {
            company_id: None,
            email: String::new(),
            ..sample_user(4, true)
        };
        let resource = user_resource(&user, None).unwrap();
        let Traits::User(user) = &resource.traits else {
            panic!("expected user trait");
        };
        assert!(user.emails.is_empty());
        assert!(user.profile["companyId"].is_null());
    }

    #[tokio::test]
    async fn test_list_users_pages() {
        let mock_server = MockServer::start().await;
        let next_link = format!("{}/api/v2/users?$skip=100&$top=100", mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .and(query_param("$skip", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"id": 2, "userName": "second", "isActive": true}]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .and(query_param("$top", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"id": 1, "userName": "first", "isActive": true}],
                "@nextLink": next_link
            })))
            .mount(&mock_server)
            .await;

        let syncer = UserSyncer::new(Arc::new(AvalaraClient::test_client(&mock_server.uri())));

        let first = syncer.list(None, "").await.unwrap();
        assert_eq!(first.items[0].display_name, "first");
        assert_eq!(first.next_token, next_link);

        let second = syncer.list(None, &first.next_token).await.unwrap();
        assert_eq!(second.items[0].display_name, "second");
        assert!(!second.has_next());
    }

    #[tokio::test]
    async fn test_list_users_error_has_context() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let syncer = UserSyncer::new(Arc::new(AvalaraClient::test_client(&mock_server.uri())));
        let err = syncer.list(None, "").await.unwrap_err();
        assert!(err.to_string().starts_with("failed to list users"));
    }

    #[tokio::test]
    async fn test_user_entitlements_and_grants_are_empty() {
        let syncer = UserSyncer::new(Arc::new(AvalaraClient::test_client("http://127.0.0.1:9")));
        let resource = user_resource(&sample_user(1, true), None).unwrap();

        assert_eq!(syncer.entitlements(&resource, "").await.unwrap(), Page::empty());
        assert_eq!(syncer.grants(&resource, "").await.unwrap(), Page::empty());
    }

    #[tokio::test]
    async fn test_list_users_tolerates_null_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [
                    {"id": 1, "userName": "jdoe", "firstName": null, "email": null, "isActive": true},
                    {"id": 2, "userName": "asmith", "email": "asmith@example.org", "isActive": null}
                ]
            })))
            .mount(&mock_server)
            .await;

        let syncer = UserSyncer::new(Arc::new(AvalaraClient::test_client(&mock_server.uri())));
        let page = syncer.list(None, "").await.unwrap();

        assert_eq!(page.items.len(), 2);
        let Traits::User(first) = &page.items[0].traits else {
            panic!("expected user trait");
        };
        assert!(first.emails.is_empty());
        assert_eq!(first.status, UserStatus::Enabled);
        let Traits::User(second) = &page.items[1].traits else {
            panic!("expected user trait");
        };
        assert_eq!(second.status, UserStatus::Disabled);
        assert_eq!(second.emails[0].address, "asmith@example.org");
    }
}
