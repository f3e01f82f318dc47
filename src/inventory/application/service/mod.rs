pub(crate) mod cluster_lookup_service;
