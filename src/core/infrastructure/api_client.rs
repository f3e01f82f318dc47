//! Internal HTTP client that speaks vSphere SOAP and carries the session cookie.

use crate::{
    config::ClientConfig,
    core::{
        domain::{
            error::{VsanError, VsanResult},
            model::{vsphere_auth::VsphereAuth, vsphere_connection::VsphereConnection},
        },
        infrastructure::{envelope::SoapRequest, xml::XmlNode},
    },
};
use reqwest::{
    Client, StatusCode,
    header::{CONTENT_TYPE, COOKIE},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Internal HTTP client that posts SOAP envelopes to a vCenter endpoint.
///
/// Once a session is established the client adds the `vmware_soap_session`
/// cookie to each request, on both the `/sdk` and the `/vsanHealth` services.
/// SOAP faults are turned into [`VsanError`] values; nothing is retried.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<VsphereConnection>,
    auth: Arc<RwLock<Option<VsphereAuth>>>,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Creates a new `ApiClient`. The client starts unauthenticated.
    ///
    /// # Errors
    /// Returns `VsanError::Connection` if the HTTP client cannot be built.
    pub fn new(connection: VsphereConnection, config: ClientConfig) -> VsanResult<Self> {
        // With rustls, accepting invalid certificates also skips the hostname check.
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accepts_invalid_certs())
            .build()
            .map_err(|e| VsanError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            auth: Arc::new(RwLock::new(None)),
            config: Arc::new(config),
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &VsphereConnection {
        &self.connection
    }

    /// Sets the authentication state after a successful login.
    pub async fn set_auth(&self, auth: VsphereAuth) {
        let mut lock = self.auth.write().await;
        *lock = Some(auth);
    }

    /// Returns the current authentication state, if any.
    pub async fn auth(&self) -> Option<VsphereAuth> {
        self.auth.read().await.clone()
    }

    /// Drops the authentication state and returns what was stored.
    pub async fn clear_auth(&self) -> Option<VsphereAuth> {
        self.auth.write().await.take()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.auth.read().await.is_some()
    }

    /// Sends a request and returns the `<MethodResponse>` element of the body.
    ///
    /// # Errors
    /// Returns `VsanError::Fault` or `VsanError::Authentication` for SOAP
    /// faults, `VsanError::Connection` for transport failures and non-success
    /// statuses, and `VsanError::Parse` when the answer is not a SOAP envelope.
    pub async fn invoke(&self, request: &SoapRequest) -> VsanResult<XmlNode> {
        let response = self.send(request).await?;
        self.read_response(request, response).await
    }

    /// Posts the envelope without interpreting the answer. Used directly by
    /// the login flow, which needs the response headers.
    pub async fn send(&self, request: &SoapRequest) -> VsanResult<reqwest::Response> {
        let url = self
            .connection
            .url()
            .with_path(request.endpoint().path())?;

        debug!(method = request.method(), %url, "sending SOAP request");

        let mut req_builder = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", request.endpoint().soap_action(&self.config))
            .body(request.to_envelope());

        {
            let auth_guard = self.auth.read().await;
            if let Some(auth) = auth_guard.as_ref() {
                req_builder = req_builder.header(COOKIE, auth.cookie().as_cookie_header());
            }
        }

        req_builder
            .send()
            .await
            .map_err(|e| VsanError::Connection(format!("HTTP request failed: {}", e)))
    }

    /// Interprets a SOAP answer to `request`.
    pub async fn read_response(
        &self,
        request: &SoapRequest,
        response: reqwest::Response,
    ) -> VsanResult<XmlNode> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| VsanError::Connection(format!("Failed to read response: {}", e)))?;

        let envelope = if text.trim().is_empty() {
            None
        } else {
            XmlNode::parse(&text).ok()
        };

        if let Some(fault) = envelope.as_ref().and_then(|e| e.descendant("Fault")) {
            return Err(fault_error(fault));
        }

        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    VsanError::Authentication(format!("Endpoint rejected the session ({})", status))
                }
                _ => VsanError::Connection(format!("API error ({}): {}", status, text)),
            });
        }

        let envelope = envelope.ok_or_else(|| {
            VsanError::Parse(format!(
                "{} answered with a document that is not XML",
                request.method()
            ))
        })?;

        envelope
            .require_child("Body")?
            .require_child(&request.response_element())
            .cloned()
    }
}

/// Maps a `<Fault>` element to an error. Login and session faults become
/// authentication errors; everything else keeps the server's code and text.
fn fault_error(fault: &XmlNode) -> VsanError {
    let code = fault
        .child("faultcode")
        .map(XmlNode::text)
        .unwrap_or("Unknown")
        .to_string();
    let message = fault
        .child("faultstring")
        .map(XmlNode::text)
        .unwrap_or("no fault string")
        .to_string();

    let kind = fault
        .child("detail")
        .and_then(XmlNode::first_child)
        .map(|d| d.name().trim_end_matches("Fault"));

    match kind {
        Some("InvalidLogin") | Some("NotAuthenticated") => VsanError::Authentication(message),
        _ => VsanError::Fault { code, message },
    }
}
