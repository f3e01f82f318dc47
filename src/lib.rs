mod auth;
pub mod capacity;
mod config;
pub mod core;
mod inventory;
pub mod logging;
mod session;
mod vsan;

#[cfg(test)]
mod tests;

pub use crate::capacity::{
    VsanApi,
    format::natural_size,
    report::{CapacityReport, ReportOutcome, run_report},
};
pub use crate::config::ClientConfig;
pub use crate::core::domain::error::{ValidationError, VsanError, VsanResult};
pub use crate::core::domain::model::{
    about_info::{AboutInfo, ApiType},
    capacity_summary::CapacitySummary,
    managed_object::ManagedObjectReference,
};
pub use crate::session::VsanSession;

use crate::{
    auth::application::service::{
        login_service::LoginService, service_content_service::ServiceContentService,
    },
    core::{
        domain::{
            model::vsphere_connection::VsphereConnection,
            value_object::{
                DEFAULT_PORT, VsphereHost, VspherePassword, VspherePort, VsphereUrl,
                VsphereUsername, validate_host, validate_username,
            },
        },
        infrastructure::api_client::ApiClient,
    },
};
use std::{future::Future, sync::Arc};
use tracing::warn;

/// A client for reading VSAN capacity from a vCenter Server.
///
/// The client holds the validated target and credentials. Sessions are
/// opened with [`VsanClient::connect`], or scoped with
/// [`VsanClient::with_session`], which always logs out afterwards.
///
/// # Examples
///
/// ```no_run
/// use vsan_capacity::{ReportOutcome, VsanClient, VsanResult, run_report};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> VsanResult<()> {
///     let client = VsanClient::builder()
///         .host("vcenter.example.com")
///         .port(443)
///         .credentials("administrator@vsphere.local", "password")
///         .accept_invalid_certs(true)
///         .build()?;
///
///     let outcome = client
///         .with_session(|session| async move {
///             run_report(&session, "VSAN-Cluster", "vcenter.example.com").await
///         })
///         .await?;
///
///     if let ReportOutcome::Reported(report) = outcome {
///         print!("{}", report);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct VsanClient {
    api_client: Arc<ApiClient>,
}

/// Builder for VsanClient configuration
#[derive(Debug, Default)]
pub struct VsanClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    insecure_http: bool,
    accept_invalid_certs: bool,
    config: ClientConfig,
}

impl VsanClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Port of the endpoint, 443 when not set.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Use https (the default) or plain http.
    pub fn secure(mut self, secure: bool) -> Self {
        self.insecure_http = !secure;
        self
    }

    /// Disable certificate and hostname verification. Meant for lab
    /// endpoints with self-signed certificates.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the settings and builds the client. No network traffic
    /// happens here.
    ///
    /// # Errors
    /// Returns `VsanError::Validation` for a missing host, a malformed
    /// username or a host that does not form a URL, and `VsanError::Connection` if the HTTP client
    /// cannot be created.
    pub fn build(self) -> VsanResult<VsanClient> {
        let host = self.host.ok_or_else(|| missing_field("host", "Host is required"))?;
        validate_host(&host)?;

        let port = self.port.unwrap_or(DEFAULT_PORT);

        let username = self
            .username
            .ok_or_else(|| missing_field("username", "Username is required"))?;
        validate_username(&username)?;

        let password = self
            .password
            .ok_or_else(|| missing_field("password", "Password is required"))?;

        let host = VsphereHost::new_unchecked(host);
        let port = VspherePort::new_unchecked(port);
        let secure = !self.insecure_http;
        let url = VsphereUrl::new(&host, &port, secure)?;

        let connection = VsphereConnection::new(
            host,
            port,
            VsphereUsername::new_unchecked(username),
            VspherePassword::new_unchecked(password),
            secure,
            self.accept_invalid_certs,
            url,
        );

        Ok(VsanClient {
            api_client: Arc::new(ApiClient::new(connection, self.config)?),
        })
    }
}

fn missing_field(field: &str, message: &str) -> VsanError {
    ValidationError::Field {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

impl VsanClient {
    /// Creates a new builder for VsanClient configuration
    pub fn builder() -> VsanClientBuilder {
        VsanClientBuilder::default()
    }

    /// The endpoint host this client targets.
    pub fn host(&self) -> &str {
        self.api_client.connection().host().as_str()
    }

    pub(crate) fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// Opens a session: reads the service content, then logs in.
    ///
    /// The caller owns the session and must call [`VsanSession::logout`];
    /// prefer [`VsanClient::with_session`].
    ///
    /// # Errors
    /// Returns `VsanError::Authentication` for rejected credentials and
    /// `VsanError::Connection` when the endpoint cannot be reached.
    pub async fn connect(&self) -> VsanResult<VsanSession> {
        let content = ServiceContentService::new()
            .execute(&self.api_client)
            .await?;
        let auth = LoginService::new()
            .execute(&self.api_client, &content)
            .await?;
        self.api_client.set_auth(auth).await;
        Ok(VsanSession::new(Arc::clone(&self.api_client), content))
    }

    /// Opens a session, runs `body` with it, and logs out exactly once
    /// whatever the body does: return `Ok`, return `Err` or panic.
    ///
    /// The body runs as a separate task so a panic can be caught; the session
    /// is closed and the panic resumed afterwards. A failed logout is logged
    /// and does not replace the body's result.
    ///
    /// # Errors
    /// Errors from opening the session (in which case the body never runs
    /// and there is nothing to log out) and errors returned by the body.
    pub async fn with_session<F, Fut, T>(&self, body: F) -> VsanResult<T>
    where
        F: FnOnce(VsanSession) -> Fut,
        Fut: Future<Output = VsanResult<T>> + Send + 'static,
        T: Send + 'static,
    {
        let session = self.connect().await?;
        let outcome = tokio::spawn(body(session.clone())).await;

        if let Err(e) = session.logout().await {
            warn!(error = %e, host = self.host(), "failed to close session");
        }

        match outcome {
            Ok(result) => result,
            Err(join_error) if join_error.is_panic() => {
                std::panic::resume_unwind(join_error.into_panic())
            }
            Err(join_error) => Err(VsanError::Task(join_error.to_string())),
        }
    }
}
