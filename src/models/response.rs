use serde::{Deserialize, Serialize};

/// The `{success, data, error}` envelope every rewards endpoint returns.
///
/// `data` is a `Platform` list for `/rewards` and a single `Platform`
/// for `/rewards/{platform}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub error: Option<String>,
    pub count: Option<u64>,
}
