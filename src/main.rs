// ssostat: inspect cached AWS SSO tokens and probe the active credential.
// Sequential: list the cache, print each entry, run one STS identity check.

mod cache;
mod error;
mod identity;
mod report;

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;

use crate::error::SsostatError;

#[derive(Parser)]
#[command(
    name = "ssostat",
    version,
    about = "Inspect cached AWS SSO tokens and check whether the active credential still resolves to an identity"
)]
struct Cli {
    /// AWS profile to probe with sts get-caller-identity.
    #[arg(long, default_value = "my-profile")]
    profile: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(cache_dir) = cache::paths::sso_cache_dir() else {
        eprintln!("Could not determine the home directory.");
        return ExitCode::FAILURE;
    };

    let now = Utc::now();
    let entries = match cache::scan_cache(&cache_dir) {
        Ok(entries) => entries,
        Err(SsostatError::CacheDirMissing(dir)) => {
            println!("Cache directory not found: {}", dir.display());
            println!("Run 'aws sso login --profile <profile>' first.");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Failed to read cache: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}\n", report::CACHE_HEADER);
    for entry in &entries {
        print!("{}", report::render_entry(entry, now));
        println!();
    }

    println!("{}\n", report::IDENTITY_HEADER);
    let status = identity::probe_identity(&cli.profile);
    print!("{}", report::render_identity(&status));
    println!();

    ExitCode::SUCCESS
}
