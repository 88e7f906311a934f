use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;

pub const SYNC_PATH: &str = "/api/sync";

/// Body of `POST /api/sync`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncRequest {
    pub entity: String,
    pub id: String,
    pub data: Value,
}

impl ApiClient {
    /// Persist an external record into the local backend. Returns whatever
    /// the backend answers with (`null` for an empty body).
    pub async fn sync_record(&self, request: &SyncRequest) -> Result<Value, ApiError> {
        log::info!("Syncing {} #{}", request.entity, request.id);
        self.post(SYNC_PATH, request).await
    }
}
