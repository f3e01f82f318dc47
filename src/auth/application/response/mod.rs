pub(crate) mod login_response;
pub(crate) mod service_content_response;
