#![cfg(target_arch = "wasm32")]
extern crate wasm_bindgen_test;

use std::rc::Rc;
use storefront_admin_notifications::adapters::SessionStorage;
use storefront_admin_notifications::ports::SessionStorePort;
use storefront_admin_notifications::{Platform, SeenSet};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "admin_seen_notification_ids_test";

fn platform() -> Platform {
    Platform::new().with_session_store(Rc::new(SessionStorage::new().expect("sessionStorage")))
}

#[wasm_bindgen_test]
fn seen_set_survives_reload() {
    let platform = platform();
    platform.session_store().set(KEY, "[]").unwrap();

    let mut seen = SeenSet::load(&platform, KEY);
    seen.add(1);
    seen.add(2);

    let reloaded = SeenSet::load(&platform, KEY);
    assert_eq!(reloaded.ids(), vec![1, 2]);
}

#[wasm_bindgen_test]
fn corrupt_session_state_is_ignored() {
    let platform = platform();
    platform.session_store().set(KEY, "definitely not json").unwrap();

    let seen = SeenSet::load(&platform, KEY);

    assert!(seen.is_empty());
}
