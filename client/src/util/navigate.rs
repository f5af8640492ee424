//! Window and router navigation.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use gateway::{NavigationMode, Navigator};
use leptos_router::NavigateOptions;

/// Full page load via `window.location`. No-op outside the browser.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Navigator usable without a router in scope; every navigation reloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str, mode: NavigationMode) {
        if mode == NavigationMode::Soft {
            log::debug!("no router in scope, reloading into {path}");
        }
        hard_navigate(path);
    }
}

/// Soft navigations go through the Leptos router (`use_navigate`), hard ones
/// reload the page.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str, mode: NavigationMode) {
        match mode {
            NavigationMode::Soft => (self.navigate)(path, NavigateOptions::default()),
            NavigationMode::Hard => hard_navigate(path),
        }
    }
}
