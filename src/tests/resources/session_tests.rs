use crate::{
    VsanError, VsanResult, VsanSession,
    tests::{INVALID_LOGIN_FAULT, client_for, login_body, logout_body, service_content_body, soap_envelope},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

async fn mount_service_content(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<RetrieveServiceContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(service_content_body("VirtualCenter", "6.7.3")),
        )
        .mount(mock_server)
        .await;
}

async fn mount_login(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<Login xmlns"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "vmware_soap_session=\"52b6\"; Path=/; HttpOnly")
                .set_body_string(login_body()),
        )
        .expect(1)
        .mount(mock_server)
        .await;
}

async fn mount_logout(mock_server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<Logout xmlns"))
        .and(header("cookie", "vmware_soap_session=\"52b6\""))
        .respond_with(ResponseTemplate::new(200).set_body_string(logout_body()))
        .expect(times)
        .mount(mock_server)
        .await;
}

async fn exploding_body(_session: VsanSession) -> VsanResult<()> {
    panic!("inventory walk aborted");
}

#[tokio::test]
async fn test_connect_and_logout() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;
    mount_logout(&mock_server, 1).await;

    let client = client_for(&mock_server);
    let session = client.connect().await.unwrap();
    assert!(session.is_authenticated().await);
    assert_eq!(session.service_content().root_folder.value(), "group-d1");
    assert_eq!(
        session.user_session().await.unwrap().user_name,
        "VSPHERE.LOCAL\\Administrator"
    );

    session.logout().await.unwrap();
    assert!(!session.is_authenticated().await);
    assert!(session.user_session().await.is_none());

    // Closing twice does not reach the endpoint again.
    session.logout().await.unwrap();
}

#[tokio::test]
async fn test_with_session_logs_out_after_error() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;
    mount_logout(&mock_server, 1).await;

    let client = client_for(&mock_server);
    let result: VsanResult<()> = client
        .with_session(|_session| async move { Err(VsanError::Parse("boom".to_string())) })
        .await;
    assert!(matches!(result, Err(VsanError::Parse(_))));
}

#[tokio::test]
async fn test_with_session_logs_out_after_panic() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;
    mount_logout(&mock_server, 1).await;

    let client = client_for(&mock_server);
    let handle = tokio::spawn(async move { client.with_session(exploding_body).await });

    let join_error = handle.await.unwrap_err();
    assert!(join_error.is_panic());
    let payload = join_error.into_panic();
    assert_eq!(
        payload.downcast_ref::<&str>(),
        Some(&"inventory walk aborted")
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn test_with_session_keeps_result_when_logout_fails() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<Logout xmlns"))
        .respond_with(ResponseTemplate::new(500).set_body_string(soap_envelope(
            r#"<soapenv:Fault><faultcode>ServerFaultCode</faultcode><faultstring>A general system error occurred</faultstring></soapenv:Fault>"#,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value = client
        .with_session(|session| async move {
            Ok::<_, VsanError>(session.service_content().about.build.clone())
        })
        .await
        .unwrap();
    assert_eq!(value, "8217866");
}

#[tokio::test]
async fn test_with_session_login_rejected() {
    let mock_server = MockServer::start().await;
    mount_service_content(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/sdk"))
        .and(body_string_contains("<Login xmlns"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(soap_envelope(INVALID_LOGIN_FAULT)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_logout(&mock_server, 0).await;

    let client = client_for(&mock_server);
    let result = client
        .with_session(|_session| async move { Ok::<(), VsanError>(()) })
        .await;
    assert!(matches!(result, Err(VsanError::Authentication(_))));
}
