use super::*;

#[test]
fn unavailable_outside_browser_names_method() {
    assert_eq!(
        unavailable_outside_browser(HttpMethod::Get).0,
        "GET not available outside the browser"
    );
}
