#![cfg(not(feature = "csr"))]

use std::cell::RefCell;

use super::*;

#[test]
fn soft_navigation_uses_router() {
    let seen = RefCell::new(Vec::new());
    let navigator = RouterNavigator::new(|path: &str, _options: NavigateOptions| {
        seen.borrow_mut().push(path.to_owned());
    });
    navigator.navigate("/login", NavigationMode::Soft);
    assert_eq!(*seen.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn hard_navigation_bypasses_router() {
    let seen = RefCell::new(Vec::new());
    let navigator = RouterNavigator::new(|path: &str, _options: NavigateOptions| {
        seen.borrow_mut().push(path.to_owned());
    });
    navigator.navigate("/dashboard", NavigationMode::Hard);
    assert!(seen.borrow().is_empty());
}

#[test]
fn location_navigator_is_callable_off_browser() {
    LocationNavigator.navigate("/login", NavigationMode::Hard);
    LocationNavigator.navigate("/login", NavigationMode::Soft);
}
