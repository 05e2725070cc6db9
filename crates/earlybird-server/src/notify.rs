//! HTTP notifier for the remote confirmation-email function.
//!
//! POSTs the confirmation payload as JSON to the configured function URL,
//! with an optional bearer token. Invoked fire-and-forget by the signup
//! workflow — the caller logs failures and moves on.

use earlybird_core::notify::{ConfirmationRequest, Notifier, NotifyError};

use crate::config::NotifyConfig;

/// Notifier that invokes a remote HTTP function.
pub struct HttpNotifier {
    client: reqwest::Client,
    function_url: String,
    bearer_token: Option<String>,
}

impl std::fmt::Debug for HttpNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpNotifier")
            .field("function_url", &self.function_url)
            .finish_non_exhaustive()
    }
}

impl HttpNotifier {
    /// Build a notifier from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &NotifyConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("earlybird/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NotifyError::Transport {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            function_url: config.function_url.clone(),
            bearer_token: config.bearer_token.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Notifier for HttpNotifier {
    async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), NotifyError> {
        let mut req = self.client.post(&self.function_url).json(request);
        if let Some(token) = &self.bearer_token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(|e| NotifyError::Transport {
            reason: e.to_string(),
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected { status, body });
        }

        Ok(())
    }
}
