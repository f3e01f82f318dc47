pub(crate) mod space_usage_response;
