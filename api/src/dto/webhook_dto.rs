//! Payment provider webhook payload

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for `POST /api/polka/webhooks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRequest {
    pub event: String,
    pub data: WebhookData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookData {
    pub user_id: Uuid,
}
