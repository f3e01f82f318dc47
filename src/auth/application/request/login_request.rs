use crate::core::{
    domain::model::managed_object::ManagedObjectReference,
    infrastructure::envelope::{SoapEndpoint, SoapRequest},
};

/// Arguments of `SessionManager.Login`.
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

impl LoginRequest {
    pub fn into_soap(self, session_manager: &ManagedObjectReference) -> SoapRequest {
        SoapRequest::new(SoapEndpoint::Vim, "Login", session_manager)
            .text("userName", &self.user_name)
            .text("password", &self.password)
    }
}
