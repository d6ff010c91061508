//! Account API operations

use crate::avalara::pagination::PaginationOptions;
use crate::avalara::AvalaraClient;
use crate::config::api;
use crate::error::Result;

use super::models::AccountResponse;

impl AvalaraClient {
    /// Get one page of accounts visible to the authenticated user
    pub async fn get_accounts(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<(AccountResponse, Option<PaginationOptions>)> {
        self.get_page(api::ACCOUNTS, options).await
    }
}
