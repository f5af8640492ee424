//! Process-wide gateway and the services built on it.
//!
//! ERROR HANDLING
//! ==============
//! Every call goes through the error router: GET+401 clears the stored
//! credential and reloads into `/login`, 403 reloads into `/dashboard`, and
//! everything else is returned to the caller for inline display.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::OnceLock;

use gateway::{ErrorRouter, Gateway, GatewayConfig, GuardedGateway, NavigationMode};
use signup::GatewayAuthService;

use super::transport::BrowserTransport;
use crate::util::navigate::LocationNavigator;
use crate::util::session::LocalStorageSession;

/// Auth-failure redirects reload the whole page so no stale state survives.
pub const ERROR_NAVIGATION_MODE: NavigationMode = NavigationMode::Hard;

pub type BrowserGateway =
    GuardedGateway<BrowserTransport, LocalStorageSession, LocalStorageSession, LocationNavigator>;

static GATEWAY: OnceLock<BrowserGateway> = OnceLock::new();

fn build_gateway(config: GatewayConfig) -> BrowserGateway {
    GuardedGateway::new(
        Gateway::new(config, BrowserTransport, LocalStorageSession),
        ErrorRouter::new(LocalStorageSession, LocationNavigator, ERROR_NAVIGATION_MODE),
    )
}

/// The shared gateway, built on first use with the default config.
pub fn shared_gateway() -> &'static BrowserGateway {
    GATEWAY.get_or_init(|| build_gateway(GatewayConfig::default()))
}

/// Signup collaborator backed by the shared gateway.
pub fn signup_service() -> GatewayAuthService<&'static BrowserGateway> {
    GatewayAuthService::new(shared_gateway())
}
