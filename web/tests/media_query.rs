//! Browser-side tests for the media-query watch: initial state, synthetic
//! change events, and teardown. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use game_portal_web::hooks::MediaQueryWatch;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::{MediaQueryListEvent, MediaQueryListEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const QUERY: &str = "(min-width: 1px)";

fn change_event(matches: bool) -> MediaQueryListEvent {
    let init = MediaQueryListEventInit::new();
    init.set_matches(matches);
    init.set_media(QUERY);
    MediaQueryListEvent::new_with_event_init_dict("change", &init)
        .expect("failed to build change event")
}

#[wasm_bindgen_test]
fn reports_initial_state_immediately() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let _watch = MediaQueryWatch::subscribe(QUERY, move |matches| sink.borrow_mut().push(matches))
        .expect("matchMedia unavailable");

    // Every real viewport is at least 1px wide.
    assert_eq!(seen.borrow().as_slice(), &[true]);
}

#[wasm_bindgen_test]
fn follows_change_events() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let watch = MediaQueryWatch::subscribe(QUERY, move |matches| sink.borrow_mut().push(matches))
        .expect("matchMedia unavailable");

    watch
        .media_query_list()
        .dispatch_event(&change_event(false))
        .unwrap();
    watch
        .media_query_list()
        .dispatch_event(&change_event(true))
        .unwrap();

    assert_eq!(seen.borrow().as_slice(), &[true, false, true]);
}

#[wasm_bindgen_test]
fn stops_updating_after_teardown() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let watch = MediaQueryWatch::subscribe(QUERY, move |matches| sink.borrow_mut().push(matches))
        .expect("matchMedia unavailable");
    let list = watch.media_query_list().clone();

    drop(watch);
    list.dispatch_event(&change_event(false)).unwrap();

    // Only the initial report; the dropped watch no longer listens.
    assert_eq!(seen.borrow().as_slice(), &[true]);
}
