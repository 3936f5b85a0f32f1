//! Integration tests for AppContext lifecycle
//!
//! Startup reads credentials from the environment once; these tests mutate
//! process environment variables and therefore run serially.

use serial_test::serial;
use travex_domain::TravexError;
use travex_lib::context::AppContext;

const VARS: [&str; 8] = [
    "CONCUR_ACCESS_TOKEN",
    "CONCUR_REFRESH_TOKEN",
    "CONCUR_CLIENT_ID",
    "CONCUR_CLIENT_SECRET",
    "CONCUR_BASE_URL",
    "CONCUR_TOKEN_URL",
    "CONCUR_USER_ID",
    "TRAVEX_CONFIG",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_context_creation_from_env_succeeds() {
    clear_env();
    std::env::set_var("CONCUR_REFRESH_TOKEN", "rt");
    std::env::set_var("CONCUR_CLIENT_ID", "client");
    std::env::set_var("CONCUR_CLIENT_SECRET", "secret");
    std::env::set_var("CONCUR_BASE_URL", "https://emea.api.concursolutions.com");

    let ctx = AppContext::new().expect("context should build from refresh credentials");

    assert!(ctx.tokens.can_refresh());
    assert_eq!(ctx.concur.settings().base_url, "https://emea.api.concursolutions.com");
    assert_eq!(
        ctx.concur.settings().token_url(),
        "https://emea.api.concursolutions.com/oauth2/v0/token"
    );
    clear_env();
}

#[test]
#[serial]
fn test_context_creation_without_credentials_fails() {
    clear_env();
    std::env::set_var("CONCUR_CLIENT_ID", "client-without-secret");

    let err = AppContext::new().err().expect("startup must fail without usable credentials");

    assert!(matches!(err, TravexError::AuthConfig(_)), "got {err:?}");
    clear_env();
}
