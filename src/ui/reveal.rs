//! Scroll hooks
//!
//! `use_reveal` wires a section's root element to an `IntersectionObserver` and
//! exposes the one-shot [`Reveal`] flag as a signal. `use_scrolled` tracks the
//! window offset for the navbar.

use leptos::html;
use leptos::prelude::*;

use crate::core::reveal::Reveal;
#[cfg(feature = "hydrate")]
use crate::core::reveal::is_scrolled;

/// Visibility flag for a section. Flips to `true` once and stays there.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let state = RwSignal::new(Reveal::new(threshold));

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::*;

        let observer = StoredValue::new_local(None::<web_sys::IntersectionObserver>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if observer.with_value(|o| o.is_some()) || !state.get_untracked().needs_observation() {
                return;
            }

            let callback = Closure::<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, obs: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        let flipped = state
                            .try_update(|r| r.observe(entry.is_intersecting(), entry.intersection_ratio()))
                            .unwrap_or(false);
                        if flipped {
                            obs.disconnect();
                        }
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(state.get_untracked().threshold()));

            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(obs) => {
                    obs.observe(&element);
                    observer.set_value(Some(obs));
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "IntersectionObserver unavailable, revealing section");
                    state.update(|r| {
                        r.observe(true, 1.0);
                    });
                }
            }

            callback.forget();
        });

        on_cleanup(move || {
            observer.try_with_value(|o| {
                if let Some(obs) = o {
                    obs.disconnect();
                }
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = target;

    Signal::derive(move || state.with(|r| r.is_visible()))
}

/// Whether the window has scrolled past the navbar threshold
pub fn use_scrolled() -> Signal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let read_offset = move || {
            let y = window().scroll_y().unwrap_or(0.0);
            set_scrolled.set(is_scrolled(y));
        };

        // Page may be restored mid-scroll
        Effect::new(move |_| read_offset());

        let handle = window_event_listener(leptos::ev::scroll, move |_| read_offset());
        on_cleanup(move || handle.remove());
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = set_scrolled;

    scrolled.into()
}
