use crate::app::aws::GetTokenInput;
use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Name of the AWS region whose STS endpoint signs the token
    #[clap(short, long, env = "REGION")]
    pub region: String,

    /// AWS access key id of the base identity
    #[clap(long, env = "ACCESS_KEY_ID")]
    pub access_key_id: String,

    /// AWS secret access key of the base identity
    #[clap(long, env = "SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: String,

    /// ARN of an IAM role to assume before signing; empty signs as the base identity
    #[clap(long, env = "ROLE_TO_ASSUME", default_value = "")]
    pub role_to_assume: String,

    /// Name of the EKS Kubernetes cluster the token is scoped to
    #[clap(short, long, env = "CLUSTER_ID")]
    pub cluster_id: String,

    /// Session name to use when assuming the role
    #[clap(short = 's', long, default_value = None)]
    pub session_name: Option<String>,

    /// Print a client.authentication.k8s.io ExecCredential document instead of the bare token
    #[clap(long)]
    pub exec_credential: bool,
}

impl Into<GetTokenInput> for CliArgs {
    fn into(self) -> GetTokenInput {
        GetTokenInput {
            region: self.region,
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            role_to_assume: Some(self.role_to_assume).filter(|role| !role.is_empty()),
            session_name: self.session_name,
            cluster_id: self.cluster_id,
        }
    }
}
