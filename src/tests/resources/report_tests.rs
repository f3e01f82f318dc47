use crate::{
    ApiType, ReportOutcome, VsanClient, VsanError, VsanResult, run_report,
    tests::{
        client_for, find_child_body, host_folder_body, login_body, logout_body,
        mount_datacenters, service_content_body, soap_envelope, space_usage_body,
    },
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

const CLUSTER: &str = "VSAN-Cluster";

/// Mounts service content, login and a logout that must be hit exactly once.
async fn mount_session(mock_server: &MockServer, api_type: &str, api_version: &str) {
    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<RetrieveServiceContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(service_content_body(api_type, api_version)),
        )
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<Login xmlns"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "vmware_soap_session=\"52b6\"; Path=/; HttpOnly")
                .set_body_string(login_body()),
        )
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<Logout xmlns"))
        .respond_with(ResponseTemplate::new(200).set_body_string(logout_body()))
        .expect(1)
        .mount(mock_server)
        .await;
}

async fn mount_inventory(mock_server: &MockServer, found: Option<&str>) {
    mount_datacenters(mock_server, &[("Datacenter", "datacenter-2")]).await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<pathSet>hostFolder</pathSet>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(host_folder_body("group-h4")))
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<FindChild xmlns"))
        .and(body_string_contains("<name>VSAN-Cluster</name>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(find_child_body(found)))
        .mount(mock_server)
        .await;
}

async fn mount_space_usage(mock_server: &MockServer, response: ResponseTemplate, times: u64) {
    Mock::given(method("POST"))
        .and(path("/vsanHealth"))
        .and(body_string_contains("<VsanQuerySpaceUsage xmlns"))
        .respond_with(response)
        .expect(times)
        .mount(mock_server)
        .await;
}

async fn report(client: &VsanClient) -> VsanResult<ReportOutcome> {
    let host = client.host().to_string();
    client
        .with_session(move |session| async move { run_report(&session, CLUSTER, &host).await })
        .await
}

#[tokio::test]
async fn test_report_success() {
    let mock_server = MockServer::start().await;
    mount_session(&mock_server, "VirtualCenter", "6.7.3").await;
    mount_inventory(&mock_server, Some("domain-c7")).await;
    mount_space_usage(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(space_usage_body(1073741824, 536870912)),
        1,
    )
    .await;

    let client = client_for(&mock_server);
    let outcome = report(&client).await.unwrap();

    let ReportOutcome::Reported(report) = outcome else {
        panic!("expected a report, got {:?}", outcome);
    };
    assert_eq!(
        report.to_string(),
        "Cluster VSAN-Cluster\n  Total Capacity: 1.0G\n  Free Capacity: 512.0M\n"
    );
}

#[tokio::test]
async fn test_report_unsupported_version() {
    let mock_server = MockServer::start().await;
    mount_session(&mock_server, "VirtualCenter", "5.5").await;
    mount_inventory(&mock_server, Some("domain-c7")).await;
    mount_space_usage(&mock_server, ResponseTemplate::new(200), 0).await;

    let client = client_for(&mock_server);
    let err = report(&client).await.unwrap_err();

    assert!(err.is_guard_failure());
    assert_eq!(
        err.to_string(),
        "The Virtual Center with version 5.5 (lower than 6.0) is not supported."
    );
}

#[tokio::test]
async fn test_report_cluster_not_found() {
    let mock_server = MockServer::start().await;
    mount_session(&mock_server, "VirtualCenter", "6.0").await;
    mount_inventory(&mock_server, None).await;
    mount_space_usage(&mock_server, ResponseTemplate::new(200), 0).await;

    let client = client_for(&mock_server);
    let err = report(&client).await.unwrap_err();

    assert!(matches!(err, VsanError::ClusterNotFound { .. }));
    assert_eq!(
        err.to_string(),
        format!("Cluster VSAN-Cluster is not found for {}", client.host())
    );
}

#[tokio::test]
async fn test_report_query_fault() {
    let mock_server = MockServer::start().await;
    mount_session(&mock_server, "VirtualCenter", "6.5").await;
    mount_inventory(&mock_server, Some("domain-c7")).await;
    mount_space_usage(
        &mock_server,
        ResponseTemplate::new(500).set_body_string(soap_envelope(
            r#"<soapenv:Fault><faultcode>ServerFaultCode</faultcode><faultstring>VSAN is not enabled on the cluster</faultstring></soapenv:Fault>"#,
        )),
        1,
    )
    .await;

    let client = client_for(&mock_server);
    let err = report(&client).await.unwrap_err();

    assert!(!err.is_guard_failure());
    match err {
        VsanError::Fault { message, .. } => {
            assert_eq!(message, "VSAN is not enabled on the cluster")
        }
        other => panic!("expected a fault, got {:?}", other),
    }
}

#[tokio::test]
async fn test_report_skips_host_agent() {
    let mock_server = MockServer::start().await;
    mount_session(&mock_server, "HostAgent", "6.7.3").await;
    mount_space_usage(&mock_server, ResponseTemplate::new(200), 0).await;

    let client = client_for(&mock_server);
    let outcome = report(&client).await.unwrap();

    assert_eq!(
        outcome,
        ReportOutcome::Skipped {
            api_type: ApiType::HostAgent
        }
    );
}
