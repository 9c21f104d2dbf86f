//! Configuration for the account service

use chirpy_shared::config::WebhookConfig;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Key the payment provider must present on upgrade webhooks
    pub webhook_key: String,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self::from(&WebhookConfig::default())
    }
}

impl From<&WebhookConfig> for AccountServiceConfig {
    fn from(config: &WebhookConfig) -> Self {
        Self {
            webhook_key: config.polka_key.clone(),
        }
    }
}
