//! Request side of the SOAP protocol: endpoints and envelope construction.

use crate::{config::ClientConfig, core::domain::model::managed_object::ManagedObjectReference};
use quick_xml::escape::escape;

const ENVELOPE_OPEN: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/""#,
    r#" xmlns:xsd="http://www.w3.org/2001/XMLSchema""#,
    r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    "<soapenv:Body>"
);
const ENVELOPE_CLOSE: &str = "</soapenv:Body></soapenv:Envelope>";

/// The two SOAP services a vCenter exposes to this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SoapEndpoint {
    /// Core vSphere API (`/sdk`, `urn:vim25`).
    Vim,
    /// VSAN management API (`/vsanHealth`, `urn:vsan`).
    Vsan,
}

impl SoapEndpoint {
    pub(crate) fn path(self) -> &'static str {
        match self {
            SoapEndpoint::Vim => "/sdk",
            SoapEndpoint::Vsan => "/vsanHealth",
        }
    }

    pub(crate) fn namespace(self) -> &'static str {
        match self {
            SoapEndpoint::Vim => "urn:vim25",
            SoapEndpoint::Vsan => "urn:vsan",
        }
    }

    pub(crate) fn soap_action(self, config: &ClientConfig) -> String {
        let version = match self {
            SoapEndpoint::Vim => &config.vim_version,
            SoapEndpoint::Vsan => &config.vsan_version,
        };
        format!("{}/{}", self.namespace(), version)
    }
}

/// One SOAP method call. Parameters are appended in order; every text value
/// is escaped.
#[derive(Debug, Clone)]
pub(crate) struct SoapRequest {
    endpoint: SoapEndpoint,
    method: &'static str,
    params: String,
}

impl SoapRequest {
    /// Starts a call of `method` on the managed object `this`.
    pub(crate) fn new(
        endpoint: SoapEndpoint,
        method: &'static str,
        this: &ManagedObjectReference,
    ) -> Self {
        Self {
            endpoint,
            method,
            params: String::new(),
        }
        .moref("_this", this)
    }

    pub(crate) fn moref(mut self, tag: &str, value: &ManagedObjectReference) -> Self {
        self.params.push_str(&moref_element(tag, value));
        self
    }

    pub(crate) fn text(mut self, tag: &str, value: &str) -> Self {
        self.params
            .push_str(&format!("<{tag}>{}</{tag}>", escape(value)));
        self
    }

    /// Appends a pre-built fragment. Callers are responsible for escaping.
    pub(crate) fn fragment(mut self, xml: &str) -> Self {
        self.params.push_str(xml);
        self
    }

    pub(crate) fn endpoint(&self) -> SoapEndpoint {
        self.endpoint
    }

    pub(crate) fn method(&self) -> &'static str {
        self.method
    }

    /// Name of the body element the server answers with.
    pub(crate) fn response_element(&self) -> String {
        format!("{}Response", self.method)
    }

    pub(crate) fn to_envelope(&self) -> String {
        format!(
            r#"{open}<{method} xmlns="{ns}">{params}</{method}>{close}"#,
            open = ENVELOPE_OPEN,
            method = self.method,
            ns = self.endpoint.namespace(),
            params = self.params,
            close = ENVELOPE_CLOSE,
        )
    }
}

/// Renders `<tag type="Kind">value</tag>`.
pub(crate) fn moref_element(tag: &str, value: &ManagedObjectReference) -> String {
    format!(
        r#"<{tag} type="{}">{}</{tag}>"#,
        escape(value.kind()),
        escape(value.value())
    )
}
