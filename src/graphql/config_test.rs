use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var("DASHBOARD_API_URL");
        std::env::remove_var("DASHBOARD_API_TOKEN_ENV");
        std::env::remove_var("DASHBOARD_API_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("DASHBOARD_API_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("TEST_DASHBOARD_TOKEN");
    }
}

#[test]
fn from_env_defaults() {
    unsafe {
        clear_api_env();
        std::env::set_var("DASHBOARD_API_URL", "https://shop.example.test/graphql/");
    }

    let cfg = GraphqlConfig::from_env().unwrap();
    assert_eq!(cfg.api_url, "https://shop.example.test/graphql/");
    assert!(cfg.token.is_none());
    assert_eq!(cfg.timeouts, ApiTimeouts::default());

    unsafe { clear_api_env() };
}

#[test]
fn from_env_reads_token_and_timeouts() {
    unsafe {
        clear_api_env();
        std::env::set_var("DASHBOARD_API_URL", " http://localhost:8000/graphql/ ");
        std::env::set_var("DASHBOARD_API_TOKEN_ENV", "TEST_DASHBOARD_TOKEN");
        std::env::set_var("TEST_DASHBOARD_TOKEN", "staff-token");
        std::env::set_var("DASHBOARD_API_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("DASHBOARD_API_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = GraphqlConfig::from_env().unwrap();
    assert_eq!(cfg.api_url, "http://localhost:8000/graphql/");
    assert_eq!(cfg.token.as_deref(), Some("staff-token"));
    assert_eq!(cfg.timeouts, ApiTimeouts { request_secs: 5, connect_secs: 2 });

    unsafe { clear_api_env() };
}

#[test]
fn from_env_missing_url_errors() {
    unsafe { clear_api_env() };

    let err = GraphqlConfig::from_env().unwrap_err();
    assert!(matches!(err, GraphqlError::MissingEndpoint { ref var } if var == "DASHBOARD_API_URL"));
}

#[test]
fn from_env_rejects_non_http_url() {
    unsafe {
        clear_api_env();
        std::env::set_var("DASHBOARD_API_URL", "ftp://shop.example.test");
    }

    let err = GraphqlConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid DASHBOARD_API_URL"));

    unsafe { clear_api_env() };
}

#[test]
fn from_env_missing_named_token_errors() {
    unsafe {
        clear_api_env();
        std::env::set_var("DASHBOARD_API_URL", "https://shop.example.test/graphql/");
        std::env::set_var("DASHBOARD_API_TOKEN_ENV", "TEST_DASHBOARD_TOKEN");
    }

    let err = GraphqlConfig::from_env().unwrap_err();
    assert!(matches!(err, GraphqlError::MissingToken { ref var } if var == "TEST_DASHBOARD_TOKEN"));

    unsafe { clear_api_env() };
}
