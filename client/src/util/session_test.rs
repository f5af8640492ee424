#![cfg(not(feature = "csr"))]

use super::*;
use gateway::TOKEN_KEY;

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(LocalStorageSession.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(LocalStorageSession.token().unwrap(), None);
    assert_eq!(LocalStorageSession.credential().unwrap(), None);
}

#[test]
fn writes_are_noops_but_callable() {
    LocalStorageSession.set(TOKEN_KEY, "abc").unwrap();
    LocalStorageSession.clear_credential().unwrap();
    assert_eq!(LocalStorageSession.get(TOKEN_KEY).unwrap(), None);
}
