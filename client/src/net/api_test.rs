use super::*;

#[test]
fn shared_gateway_uses_default_config() {
    let config = shared_gateway().gateway().config();
    assert_eq!(config.base_url, "http://localhost:8080/api");
    assert!(config.with_credentials);
}

#[test]
fn shared_gateway_is_built_once() {
    assert!(std::ptr::eq(shared_gateway(), shared_gateway()));
}

#[test]
fn error_router_reloads_the_page() {
    assert_eq!(shared_gateway().router().mode(), NavigationMode::Hard);
}

#[test]
fn build_gateway_honours_config() {
    let gw = build_gateway(GatewayConfig::default().with_base_url("https://expenses.test/api/"));
    assert_eq!(gw.gateway().config().base_url, "https://expenses.test/api");
}
