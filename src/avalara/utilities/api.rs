//! Utility API operations

use crate::avalara::AvalaraClient;
use crate::config::api;
use crate::error::Result;

use super::models::PingResponse;

impl AvalaraClient {
    /// Check connectivity and authentication status
    pub async fn ping(&self) -> Result<PingResponse> {
        self.get(api::PING, None).await
    }
}
