use super::*;

#[test]
fn default_config_clears_on_logout_regardless_of_outcome() {
    let config = ClientConfig::default();
    assert_eq!(config.logout_policy, LogoutPolicy::AlwaysClear);
    assert_eq!(config.bootstrap_timeout_ms, DEFAULT_BOOTSTRAP_TIMEOUT_MS);
}

#[test]
fn sso_login_url_encodes_origin_and_callback() {
    let config = ClientConfig::default();
    assert_eq!(
        config.sso_login_url("https://shop.igate.test"),
        "https://auth.emergentagent.com/?redirect=https%3A%2F%2Fshop.igate.test%2Fdashboard"
    );
}

#[test]
fn sso_login_url_tolerates_trailing_slash_on_origin() {
    let config = ClientConfig::default();
    assert_eq!(
        config.sso_login_url("http://localhost:3000/"),
        "https://auth.emergentagent.com/?redirect=http%3A%2F%2Flocalhost%3A3000%2Fdashboard"
    );
}
