/// Base URL of the Power BI REST API, every endpoint is relative to it
pub const DEFAULT_BASE_URL: &str = "https://api.powerbi.com/v1.0";
/// Microsoft identity platform host used to obtain access tokens
pub const DEFAULT_AUTHORITY_URL: &str = "https://login.microsoftonline.com";
/// Tenant used when none is configured
pub const DEFAULT_TENANT_ID: &str = "common";
/// OAuth scope granting access to the Power BI API
pub const DEFAULT_SCOPE: &str = "https://analysis.windows.net/powerbi/api/.default";
/// Number of entries requested from refresh history endpoints when no limit is given
pub const DEFAULT_REFRESH_TOP: u32 = 500;
/// Capacity identifier the service interprets as "shared capacity"
pub const SHARED_CAPACITY_ID: &str = "00000000-0000-0000-0000-000000000000";
/// User agent string used in HTTP requests to identify this client to the Power BI service
pub const USER_AGENT: &str = "powerbi-client/0.1.0";
