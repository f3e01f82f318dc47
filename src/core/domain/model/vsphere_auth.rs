use crate::core::domain::value_object::SessionCookie;

/// The `UserSession` returned by `SessionManager.Login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub key: String,
    pub user_name: String,
    pub full_name: String,
}

/// Authentication state of an open session.
#[derive(Debug, Clone)]
pub struct VsphereAuth {
    cookie: SessionCookie,
    user_session: UserSession,
}

impl VsphereAuth {
    pub fn new(cookie: SessionCookie, user_session: UserSession) -> Self {
        Self {
            cookie,
            user_session,
        }
    }

    pub fn cookie(&self) -> &SessionCookie {
        &self.cookie
    }

    pub fn user_session(&self) -> &UserSession {
        &self.user_session
    }
}
