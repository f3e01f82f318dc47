pub(crate) mod api_client;
pub(crate) mod envelope;
pub(crate) mod xml;
