use crate::{
    auth::application::{request::login_request::LoginRequest, response::login_response::LoginResponse},
    core::{
        domain::{
            error::{VsanError, VsanResult},
            model::{
                service_content::ServiceContent, vsphere_auth::VsphereAuth,
                vsphere_connection::VsphereConnection,
            },
            value_object::{SESSION_COOKIE_NAME, SessionCookie},
        },
        infrastructure::api_client::ApiClient,
    },
};
use reqwest::header::SET_COOKIE;
use tracing::info;

/// Opens a session with `SessionManager.Login`.
pub struct LoginService;

impl LoginService {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        api_client: &ApiClient,
        content: &ServiceContent,
    ) -> VsanResult<VsphereAuth> {
        let request =
            self.build_login_request(api_client.connection()).into_soap(&content.session_manager);
        let response = api_client.send(&request).await?;

        // Headers must be read before the body consumes the response.
        let set_cookie = self.find_session_cookie(&response);
        let node = api_client.read_response(&request, response).await?;
        let login = LoginResponse::try_from(&node)?;

        let cookie = set_cookie.ok_or_else(|| {
            VsanError::Authentication("Login response carried no session cookie".to_string())
        })?;
        let cookie = SessionCookie::from_set_cookie(&cookie)?;

        info!(
            user = %login.user_session.user_name,
            host = api_client.connection().host().as_str(),
            "session established"
        );
        Ok(VsphereAuth::new(cookie, login.user_session))
    }

    fn build_login_request(&self, connection: &VsphereConnection) -> LoginRequest {
        LoginRequest {
            user_name: connection.username().as_str().to_string(),
            password: connection.password().as_str().to_string(),
        }
    }

    fn find_session_cookie(&self, response: &reqwest::Response) -> Option<String> {
        response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.trim_start().starts_with(SESSION_COOKIE_NAME))
            .map(str::to_string)
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}
