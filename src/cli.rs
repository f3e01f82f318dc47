use clap::{ArgAction, Parser};

/// Cluster queried when `--cluster` is not given.
pub const DEFAULT_CLUSTER: &str = "VSAN-Cluster";

/// Show the VSAN total and free capacity of a vCenter cluster.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Remote host to connect to.
    #[arg(short = 's', long, env = "VSPHERE_HOST")]
    pub host: String,

    /// Port to connect on.
    #[arg(short = 'o', long, default_value_t = 443)]
    pub port: u16,

    /// User name to use when connecting to host.
    #[arg(short = 'u', long, env = "VSPHERE_USER")]
    pub user: String,

    /// Password to use when connecting to host. Prompted for when omitted.
    #[arg(short = 'p', long, env = "VSPHERE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Name of the cluster to report on.
    #[arg(long = "cluster", value_name = "CLUSTER", default_value = DEFAULT_CLUSTER)]
    pub cluster_name: String,

    /// Verify the endpoint's TLS certificate and hostname.
    #[arg(long)]
    pub strict_tls: bool,

    /// Increase log output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn password_prompt(&self) -> String {
        format!(
            "Enter password for host {} and user {}: ",
            self.host, self.user
        )
    }
}
