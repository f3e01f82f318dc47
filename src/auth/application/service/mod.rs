pub(crate) mod login_service;
pub(crate) mod logout_service;
pub(crate) mod service_content_service;
