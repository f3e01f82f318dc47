pub(crate) mod find_child_response;
pub(crate) mod property_response;
