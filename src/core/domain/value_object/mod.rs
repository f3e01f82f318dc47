mod api_version;
mod session_cookie;
mod vsphere_host;
mod vsphere_password;
mod vsphere_port;
mod vsphere_url;
mod vsphere_username;

pub use api_version::ApiVersion;
pub use session_cookie::{SESSION_COOKIE_NAME, SessionCookie};
pub use vsphere_host::VsphereHost;
pub use vsphere_password::VspherePassword;
pub use vsphere_port::{DEFAULT_PORT, VspherePort};
pub use vsphere_url::VsphereUrl;
pub use vsphere_username::VsphereUsername;

// Re-export validation functions for internal use
pub(crate) use vsphere_host::validate_host;
pub(crate) use vsphere_username::validate_username;
