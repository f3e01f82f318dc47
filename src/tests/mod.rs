//! Shared fixtures: canned SOAP bodies and clients pointed at a mock server.

mod resources;

use crate::{
    VsanClient,
    core::{
        domain::{
            model::{
                about_info::{AboutInfo, ApiType},
                managed_object::ManagedObjectReference,
                service_content::ServiceContent,
                vsphere_auth::{UserSession, VsphereAuth},
            },
            value_object::{ApiVersion, SESSION_COOKIE_NAME, SessionCookie},
        },
        infrastructure::api_client::ApiClient,
    },
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

pub(crate) const INVALID_LOGIN_FAULT: &str = r#"<soapenv:Fault><faultcode>ServerFaultCode</faultcode><faultstring>Cannot complete login due to an incorrect user name or password.</faultstring><detail><InvalidLoginFault xmlns="urn:vim25" xsi:type="InvalidLogin"></InvalidLoginFault></detail></soapenv:Fault>"#;

pub(crate) fn soap_envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenc="http://schemas.xmlsoap.org/soap/encoding/" xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<soapenv:Body>
{}
</soapenv:Body>
</soapenv:Envelope>"#,
        body
    )
}

pub(crate) fn client_for_address(host: &str, port: u16) -> VsanClient {
    VsanClient::builder()
        .host(host)
        .port(port)
        .credentials("administrator@vsphere.local", "VMware1!")
        .secure(false)
        .build()
        .unwrap()
}

pub(crate) fn client_for(mock_server: &MockServer) -> VsanClient {
    let address = mock_server.address();
    client_for_address(&address.ip().to_string(), address.port())
}

pub(crate) async fn authenticate(api_client: &ApiClient) {
    api_client
        .set_auth(VsphereAuth::new(
            SessionCookie::new_unchecked(SESSION_COOKIE_NAME.to_string(), "\"abc\"".to_string()),
            UserSession {
                key: "52a1".to_string(),
                user_name: "VSPHERE.LOCAL\\Administrator".to_string(),
                full_name: "Administrator vsphere.local".to_string(),
            },
        ))
        .await;
}

pub(crate) fn sample_about(api_type: &str, api_version: &str) -> AboutInfo {
    AboutInfo {
        name: "VMware VirtualCenter Server".to_string(),
        full_name: format!("VMware VirtualCenter Server {} build-1", api_version),
        vendor: "VMware, Inc.".to_string(),
        version: api_version.to_string(),
        build: "1".to_string(),
        api_type: ApiType::from(api_type),
        api_version: ApiVersion::new_unchecked(api_version.to_string()),
    }
}

pub(crate) fn sample_service_content() -> ServiceContent {
    ServiceContent {
        root_folder: ManagedObjectReference::new("Folder", "group-d1"),
        property_collector: ManagedObjectReference::new("PropertyCollector", "propertyCollector"),
        session_manager: ManagedObjectReference::new("SessionManager", "SessionManager"),
        search_index: ManagedObjectReference::new("SearchIndex", "SearchIndex"),
        about: sample_about("VirtualCenter", "6.7.3"),
    }
}

pub(crate) fn service_content_body(api_type: &str, api_version: &str) -> String {
    soap_envelope(&format!(
        r#"<RetrieveServiceContentResponse xmlns="urn:vim25"><returnval>
<rootFolder type="Folder">group-d1</rootFolder>
<propertyCollector type="PropertyCollector">propertyCollector</propertyCollector>
<viewManager type="ViewManager">ViewManager</viewManager>
<about>
<name>VMware VirtualCenter Server</name>
<fullName>VMware VirtualCenter Server {version} build-8217866</fullName>
<vendor>VMware, Inc.</vendor>
<version>{version}</version>
<build>8217866</build>
<localeVersion>INTL</localeVersion>
<localeBuild>000</localeBuild>
<osType>linux-x64</osType>
<productLineId>vpx</productLineId>
<apiType>{api_type}</apiType>
<apiVersion>{version}</apiVersion>
<instanceUuid>a1b2c3d4-0000-0000-0000-000000000000</instanceUuid>
<licenseProductName>VMware VirtualCenter Server</licenseProductName>
<licenseProductVersion>6.0</licenseProductVersion>
</about>
<setting type="OptionManager">VpxSettings</setting>
<sessionManager type="SessionManager">SessionManager</sessionManager>
<searchIndex type="SearchIndex">SearchIndex</searchIndex>
</returnval></RetrieveServiceContentResponse>"#,
        version = api_version,
        api_type = api_type,
    ))
}

pub(crate) fn login_body() -> String {
    soap_envelope(
        r#"<LoginResponse xmlns="urn:vim25"><returnval>
<key>52a1c4f6-3d5e-b2a8-4c1e-0f9d8e7a6b5c</key>
<userName>VSPHERE.LOCAL\Administrator</userName>
<fullName>Administrator vsphere.local</fullName>
<loginTime>2026-10-19T10:00:00.000000Z</loginTime>
<lastActiveTime>2026-10-19T10:00:00.000000Z</lastActiveTime>
<locale>en</locale>
<messageLocale>en</messageLocale>
<extensionSession>false</extensionSession>
</returnval></LoginResponse>"#,
    )
}

pub(crate) fn logout_body() -> String {
    soap_envelope(r#"<LogoutResponse xmlns="urn:vim25"></LogoutResponse>"#)
}

pub(crate) fn datacenters_body(children: &[(&str, &str)]) -> String {
    let refs: String = children
        .iter()
        .map(|(kind, value)| {
            format!(
                r#"<ManagedObjectReference type="{}" xsi:type="ManagedObjectReference">{}</ManagedObjectReference>"#,
                kind, value
            )
        })
        .collect();
    soap_envelope(&format!(
        r#"<RetrievePropertiesResponse xmlns="urn:vim25"><returnval><obj type="Folder">group-d1</obj><propSet><name>childEntity</name><val xsi:type="ArrayOfManagedObjectReference">{}</val></propSet></returnval></RetrievePropertiesResponse>"#,
        refs
    ))
}

pub(crate) fn host_folder_body(folder: &str) -> String {
    soap_envelope(&format!(
        r#"<RetrievePropertiesResponse xmlns="urn:vim25"><returnval><obj type="Datacenter">datacenter</obj><propSet><name>hostFolder</name><val type="Folder" xsi:type="ManagedObjectReference">{}</val></propSet></returnval></RetrievePropertiesResponse>"#,
        folder
    ))
}

pub(crate) fn find_child_body(found: Option<&str>) -> String {
    let returnval = found
        .map(|value| format!(r#"<returnval type="ClusterComputeResource">{}</returnval>"#, value))
        .unwrap_or_default();
    soap_envelope(&format!(
        r#"<FindChildResponse xmlns="urn:vim25">{}</FindChildResponse>"#,
        returnval
    ))
}

pub(crate) fn space_usage_body(total: i64, free: i64) -> String {
    soap_envelope(&format!(
        r#"<VsanQuerySpaceUsageResponse xmlns="urn:vsan"><returnval>
<totalCapacityB>{}</totalCapacityB>
<spaceOverview><overheadB>0</overheadB><physicalUsedB>0</physicalUsedB></spaceOverview>
<freeCapacityB>{}</freeCapacityB>
</returnval></VsanQuerySpaceUsageResponse>"#,
        total, free
    ))
}

pub(crate) async fn mount_datacenters(mock_server: &MockServer, children: &[(&str, &str)]) {
    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<pathSet>childEntity</pathSet>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(datacenters_body(children)))
        .mount(mock_server)
        .await;
}
