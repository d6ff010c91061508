//! Host-side sync driver
//!
//! Walks every syncer to completion: all resource pages first, then for each
//! resource all entitlement pages and all grant pages.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::error::Result;

use super::resource::{Entitlement, Grant, Resource};
use super::syncer::{Page, ResourceSyncer};

/// Everything collected by one sync run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub resources: Vec<Resource>,
    pub entitlements: Vec<Entitlement>,
    pub grants: Vec<Grant>,
}

/// Running totals reported after each page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncProgress<'a> {
    pub resource_type: &'a str,
    pub resources: usize,
    pub entitlements: usize,
    pub grants: usize,
}

/// Drain a paged call, following tokens until an empty one comes back
async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: std::future::Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut token = String::new();
    loop {
        let page = fetch(token).await?;
        items.extend(page.items);
        if page.next_token.is_empty() {
            return Ok(items);
        }
        token = page.next_token;
    }
}

/// Run every syncer to completion
///
/// Any error aborts the run, wrapped with the resource type that failed.
pub async fn sync_all<F>(syncers: &[Box<dyn ResourceSyncer>], mut on_progress: F) -> Result<SyncReport>
where
    F: FnMut(SyncProgress<'_>),
{
    let started_at = Utc::now();
    let mut resources = Vec::new();
    let mut entitlements = Vec::new();
    let mut grants = Vec::new();

    for syncer in syncers {
        let resource_type = syncer.resource_type().id;
        info!("Syncing {} resources", resource_type);

        let listed = collect_pages(|token| async move { syncer.list(None, &token).await })
            .await
            .map_err(|e| e.context(format!("failed to sync {} resources", resource_type)))?;
        debug!("Listed {} {} resources", listed.len(), resource_type);

        for resource in &listed {
            let found = collect_pages(|token| async move {
                syncer.entitlements(resource, &token).await
            })
            .await
            .map_err(|e| e.context(format!("failed to sync entitlements of {}", resource.id)))?;
            entitlements.extend(found);

            let found =
                collect_pages(|token| async move { syncer.grants(resource, &token).await })
                    .await
                    .map_err(|e| e.context(format!("failed to sync grants of {}", resource.id)))?;
            grants.extend(found);
        }

        resources.extend(listed);
        on_progress(SyncProgress {
            resource_type,
            resources: resources.len(),
            entitlements: entitlements.len(),
            grants: grants.len(),
        });
    }

    let report = SyncReport {
        started_at,
        finished_at: Utc::now(),
        resources,
        entitlements,
        grants,
    };
    info!(
        "Sync finished: {} resources, {} entitlements, {} grants",
        report.resources.len(),
        report.entitlements.len(),
        report.grants.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avalara::AvalaraClient;
    use crate::connector::Avalara;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_directory(server: &MockServer) {
        let next_link = format!("{}/api/v2/users?$skip=100&$top=100", server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .and(query_param("$skip", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [
                    {"id": 3, "userName": "carol", "securityRoleId": "AccountAdmin", "isActive": true}
                ]
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [
                    {"id": 1, "userName": "alice", "securityRoleId": "AccountUser", "isActive": true},
                    {"id": 2, "userName": "bob", "securityRoleId": "AccountAdmin", "isActive": false}
                ],
                "@nextLink": next_link
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/definitions/securityroles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [
                    {"id": 10, "description": "AccountUser"},
                    {"id": 11, "description": "AccountAdmin"}
                ]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_sync_all_collects_graph() {
        let mock_server = MockServer::start().await;
        mount_directory(&mock_server).await;

        let connector = Avalara::new(AvalaraClient::test_client(&mock_server.uri()));
        let mut seen = Vec::new();
        let report = sync_all(&connector.resource_syncers(), |p| {
            seen.push((p.resource_type.to_string(), p.resources))
        })
        .await
        .unwrap();

        assert_eq!(report.resources.len(), 5);
        assert_eq!(report.entitlements.len(), 2);
        assert!(report.finished_at >= report.started_at);

        let mut grants: Vec<&str> = report.grants.iter().map(|g| g.id.as_str()).collect();
        grants.sort_unstable();
        assert_eq!(
            grants,
            vec![
                "role:10:member:user:1",
                "role:11:member:user:2",
                "role:11:member:user:3"
            ]
        );

        assert_eq!(
            seen,
            vec![("user".to_string(), 3), ("role".to_string(), 5)]
        );
    }

    #[tokio::test]
    async fn test_sync_all_aborts_with_resource_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let connector = Avalara::new(AvalaraClient::test_client(&mock_server.uri()));
        let err = sync_all(&connector.resource_syncers(), |_| {})
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("failed to sync user resources"));
        assert!(matches!(
            err.root(),
            crate::error::ConnectorError::Status { status: 500 }
        ));
    }
}
