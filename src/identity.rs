// STS identity probe.
// Shells out to the AWS CLI once; a failed probe is reported, never fatal.

use std::process::Command;

use serde::Deserialize;

/// Successful `sts get-caller-identity` output.
#[derive(Debug, Clone, Deserialize)]
pub struct CallerIdentity {
    #[serde(rename = "Arn")]
    pub arn: String,
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "UserId")]
    pub user_id: Option<String>,
}

/// Outcome of the identity probe.
#[derive(Debug, Clone)]
pub enum IdentityStatus {
    Active(CallerIdentity),
    Invalid { error: String },
}

/// Run `aws sts get-caller-identity` for the profile, blocking until it exits.
/// Any failure (spawn error, non-zero exit, malformed output) comes back as
/// `Invalid` with the error text.
pub fn probe_identity(profile: &str) -> IdentityStatus {
    probe_with("aws", profile)
}

fn probe_with(program: &str, profile: &str) -> IdentityStatus {
    let output = match Command::new(program)
        .args(["sts", "get-caller-identity", "--profile", profile])
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            return IdentityStatus::Invalid {
                error: format!("failed to run {}: {}", program, err),
            };
        }
    };

    if !output.status.success() {
        return IdentityStatus::Invalid {
            error: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };
    }

    match serde_json::from_slice::<CallerIdentity>(&output.stdout) {
        Ok(identity) => IdentityStatus::Active(identity),
        Err(err) => IdentityStatus::Invalid {
            error: format!("unexpected {} output: {}", program, err),
        },
    }
}
