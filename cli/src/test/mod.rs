#![allow(clippy::unwrap_used)]
#![allow(deprecated)]

use predicates::prelude::{predicate::str::contains, PredicateBooleanExt};

use crate::{session_file::SessionFile, test::test_context::TestContext};

pub mod test_context;

// Nothing listens on the discard port
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

#[test]
fn test_config_defaults() {
    let ctx = TestContext::new();

    ctx.command()
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains(r#""server_url": "http://127.0.0.1:3000""#)
                .and(contains(r#""profile_exists": false"#)),
        );
}

#[test]
fn test_config_url_from_env() {
    let ctx = TestContext::new();

    ctx.command()
        .env("STOREFRONT_URL", "http://shop.example:8080")
        .arg("config")
        .assert()
        .success()
        .stdout(contains(r#""server_url": "http://shop.example:8080""#));
}

#[test]
fn test_init_writes_profile() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["--server-url", "http://shop.example:8080", "init"])
        .assert()
        .success()
        .stdout(contains("Created profile"));

    let contents = std::fs::read_to_string(ctx.profile_path()).unwrap();
    assert!(contents.contains("http://shop.example:8080"));

    // The profile is picked up without the flag
    ctx.command()
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains(r#""server_url": "http://shop.example:8080""#)
                .and(contains(r#""profile_exists": true"#)),
        );
}

#[test]
fn test_products_network_error() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["--server-url", UNREACHABLE_URL, "products"])
        .assert()
        .failure()
        .stderr(contains("Network error. Please check your connection."));
}

#[test]
fn test_logout_forgets_session_even_when_offline() {
    let ctx = TestContext::new();
    SessionFile::new(&ctx.session_path).save("abc123").unwrap();

    ctx.command()
        .args(["--server-url", UNREACHABLE_URL, "logout"])
        .assert()
        .failure();

    assert!(!ctx.session_path.exists());
}
