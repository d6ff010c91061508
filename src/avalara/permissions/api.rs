//! Permission API operations

use crate::avalara::pagination::{ListResponse, PaginationOptions};
use crate::avalara::AvalaraClient;
use crate::config::api;
use crate::error::Result;

/// Permission names are bare strings
pub type PermissionResponse = ListResponse<String>;

impl AvalaraClient {
    /// Get one page of permission names
    pub async fn get_permissions(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<(PermissionResponse, Option<PaginationOptions>)> {
        self.get_page(api::PERMISSIONS, options).await
    }
}
