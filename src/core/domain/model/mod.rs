pub mod about_info;
pub mod capacity_summary;
pub mod managed_object;
pub mod service_content;
pub mod vsphere_auth;
pub mod vsphere_connection;
