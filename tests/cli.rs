// End-to-end checks for the exit-code and output contract.
// HOME is pointed at a temp directory so the real SSO cache never leaks in.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ssostat(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ssostat").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn missing_cache_dir_exits_one_with_guidance() {
    let home = TempDir::new().unwrap();

    ssostat(&home)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Cache directory not found"))
        .stdout(predicate::str::contains("aws sso login"));
}

#[test]
fn populated_cache_lists_entries_and_exits_zero() {
    let home = TempDir::new().unwrap();
    let cache = home.path().join(".aws").join("sso").join("cache");
    fs::create_dir_all(&cache).unwrap();
    fs::write(
        cache.join("abc123.json"),
        r#"{
            "startUrl": "https://example.awsapps.com/start",
            "region": "us-east-1",
            "accessToken": "hunter2-token-value",
            "expiresAt": "2099-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();
    fs::write(cache.join("broken.json"), "{not json").unwrap();

    ssostat(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== AWS SSO Token Cache ==="))
        .stdout(predicate::str::contains("abc123.json"))
        .stdout(predicate::str::contains("Expires:"))
        .stdout(predicate::str::contains("Region:        us-east-1"))
        .stdout(predicate::str::contains("Tokens:        accessToken"))
        // skipped, not fatal
        .stdout(predicate::str::contains("broken.json").not())
        // presence only, never the token value
        .stdout(predicate::str::contains("hunter2-token-value").not())
        // probe section always prints, whatever the probe outcome
        .stdout(predicate::str::contains("=== STS Identity Check ==="))
        .stdout(predicate::str::contains("Status:"));
}

#[test]
fn empty_cache_dir_still_exits_zero() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".aws").join("sso").join("cache")).unwrap();

    ssostat(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== AWS SSO Token Cache ==="))
        .stdout(predicate::str::contains("=== STS Identity Check ==="));
}
