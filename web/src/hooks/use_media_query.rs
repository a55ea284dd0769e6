//! Viewport media-query hook: a scoped `matchMedia` subscription exposed as a
//! boolean signal. The listener is acquired when the owning scope mounts and
//! released when it is disposed, so an unmounted component never receives
//! another update.

use gloo_events::EventListener;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

/// MediaQueryWatch
///
/// The non-reactive core: owns the `MediaQueryList` and its change listener.
/// Dropping the watch removes the listener (gloo's `EventListener` detaches
/// itself on drop), which is the entire teardown story.
pub struct MediaQueryWatch {
    list: MediaQueryList,
    _listener: EventListener,
}

impl MediaQueryWatch {
    /// subscribe
    ///
    /// Subscribes to `query`. `on_change` receives the current match state
    /// immediately, then once per change event. Returns `None` when the
    /// environment has no `window.matchMedia` (non-browser contexts).
    pub fn subscribe(query: &str, mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let list = window.match_media(query).ok()??;

        on_change(list.matches());

        let listener = EventListener::new(&list, "change", move |event| {
            if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                on_change(event.matches());
            }
        });

        Some(Self {
            list,
            _listener: listener,
        })
    }

    /// The underlying list, mainly so tests can dispatch synthetic events.
    pub fn media_query_list(&self) -> &MediaQueryList {
        &self.list
    }
}

/// use_media_query
///
/// Reactive wrapper: returns a signal tracking whether the viewport matches
/// `query`. The signal holds the correct value from the first read and stops
/// updating once the owning scope is disposed.
pub fn use_media_query(query: &str) -> Signal<bool> {
    let (matches, set_matches) = signal(false);

    let watch = MediaQueryWatch::subscribe(query, move |state| set_matches.set(state));
    // DOM handles are not Send; the wrapper keeps the cleanup closure
    // compatible with the reactive system's requirements.
    let watch = SendWrapper::new(watch);
    on_cleanup(move || drop(watch.take()));

    matches.into()
}
