pub(crate) mod find_child_request;
pub(crate) mod retrieve_properties_request;
