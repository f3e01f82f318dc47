use crate::core::{
    domain::{error::VsanResult, model::service_content::ServiceContent},
    infrastructure::{
        api_client::ApiClient,
        envelope::{SoapEndpoint, SoapRequest},
    },
};
use tracing::info;

/// Closes a session with `SessionManager.Logout`.
pub struct LogoutService;

impl LogoutService {
    pub fn new() -> Self {
        Self
    }

    /// Logs out if the client holds a session; a client without one is left
    /// untouched. The local session state is dropped even when the remote
    /// call fails.
    pub async fn execute(&self, api_client: &ApiClient, content: &ServiceContent) -> VsanResult<()> {
        if !api_client.is_authenticated().await {
            return Ok(());
        }

        let request = SoapRequest::new(SoapEndpoint::Vim, "Logout", &content.session_manager);
        let result = api_client.invoke(&request).await;
        api_client.clear_auth().await;
        result?;

        info!(host = api_client.connection().host().as_str(), "session closed");
        Ok(())
    }
}

impl Default for LogoutService {
    fn default() -> Self {
        Self::new()
    }
}
