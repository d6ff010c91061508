/// Configuration constants for the AvaTax REST API
pub mod api {
    /// Base path for AvaTax REST v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Security role definitions endpoint
    pub const SECURITY_ROLES: &str = "/api/v2/definitions/securityroles";

    /// Permission definitions endpoint
    pub const PERMISSIONS: &str = "/api/v2/definitions/permissions";

    /// Users endpoint
    pub const USERS: &str = "/api/v2/users";

    /// Accounts endpoint
    pub const ACCOUNTS: &str = "/api/v2/accounts";

    /// Ping (health check) endpoint
    pub const PING: &str = "/api/v2/utilities/ping";

    /// Default page size for listing requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// OData-style query parameter names
    pub mod query {
        pub const TOP: &str = "$top";
        pub const SKIP: &str = "$skip";
        pub const ORDER_BY: &str = "$orderby";
        pub const FILTER: &str = "$filter";
    }

    /// Path of the per-user entitlements endpoint
    pub fn user_entitlements(account_id: i64, user_id: i64) -> String {
        format!(
            "{}/{}/users/{}/entitlements",
            ACCOUNTS, account_id, user_id
        )
    }
}

/// Base URLs for each recognized environment
pub mod environments {
    pub const PRODUCTION: &str = "production";
    pub const SANDBOX: &str = "sandbox";
    pub const TEST: &str = "test";

    pub const PRODUCTION_BASE_URL: &str = "https://rest.avatax.com";
    pub const SANDBOX_BASE_URL: &str = "https://sandbox-rest.avatax.com";
    pub const TEST_BASE_URL: &str = "http://localhost:8080";
}

/// Values used to build the `X-Avalara-Client` identification header
pub mod client {
    pub const HEADER: &str = "X-Avalara-Client";
    pub const APP_NAME: &str = "avalara-connector";
    pub const LIBRARY_NAME: &str = "Rust SDK";
    pub const API_VERSION: &str = "API_VERSION";
}

/// Configuration constants for credentials
pub mod credentials {
    pub const USERNAME_ENV_VAR: &str = "AVALARA_USERNAME";
    pub const PASSWORD_ENV_VAR: &str = "AVALARA_PASSWORD";
    pub const ENVIRONMENT_ENV_VAR: &str = "AVALARA_ENVIRONMENT";

    /// Config file directory (relative to HOME)
    pub const DIR_NAME: &str = ".avalara-connector";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default environment
    pub const ENVIRONMENT: &str = super::environments::PRODUCTION;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
