//! DOM binding for the one-shot reveal state machine.
//!
//! Each call to [`use_reveal`] owns one `RevealController` and one
//! `IntersectionObserver`. The observer is dropped from the element on the
//! first intersection, so the callback never fires again for it. When the
//! section unmounts the observer is disconnected and its callback freed.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use techcon::reveal::{IntersectionHost, RevealController, RevealState};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be on screen.
const THRESHOLD: f64 = 0.1;
/// Fire slightly before the element's top edge reaches the viewport bottom.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Inline style placing an element in its section's cascade.
pub fn reveal_delay_style(delay: Duration) -> String {
    format!("--reveal-delay: {}ms", delay.as_millis())
}

struct DomHost<'a> {
    observer: &'a IntersectionObserver,
    target: &'a Element,
}

impl IntersectionHost for DomHost<'_> {
    fn unobserve(&mut self) {
        self.observer.unobserve(self.target);
    }
}

/// Host used when the browser has no IntersectionObserver.
struct NoObserver;

impl IntersectionHost for NoObserver {
    fn unobserve(&mut self) {}
}

/// A live observer on one element. Dropping it disconnects the observer and
/// releases the callback.
struct Observation {
    observer: IntersectionObserver,
    target: Element,
    _callback: ObserverCallback,
}

impl IntersectionHost for Observation {
    fn unobserve(&mut self) {
        self.observer.unobserve(&self.target);
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `target` and reports its reveal state.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<RevealState> {
    let controller = RwSignal::new(RevealController::new());
    let observation = StoredValue::new_local(None::<Observation>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        match observe(&element, controller) {
            // Replacing an earlier observation drops (disconnects) it.
            Ok(live) => observation.set_value(Some(live)),
            Err(err) => {
                // Without an observer nobody would ever see the section.
                warn!(?err, "IntersectionObserver unavailable, revealing immediately");
                controller.update(|c| {
                    c.observe(true, &mut NoObserver);
                });
            }
        }
    });

    on_cleanup(move || {
        let mut live = observation.try_update_value(Option::take).flatten();
        let _ = controller.try_update(|c| match live.as_mut() {
            Some(live) => c.detach(live),
            None => c.detach(&mut NoObserver),
        });
        drop(live);
    });

    Signal::derive(move || controller.get().state())
}

fn observe(
    element: &Element,
    controller: RwSignal<RevealController>,
) -> Result<Observation, JsValue> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let mut host = DomHost {
                    observer: &observer,
                    target: &target,
                };
                // None once the section is unmounted; the observation is simply dropped.
                let _ = controller.try_update(|c| c.observe(entry.is_intersecting(), &mut host));
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(THRESHOLD));
    init.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Observation {
        observer,
        target: element.clone(),
        _callback: callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use techcon::reveal::Stagger;

    #[test]
    fn delay_style_is_milliseconds() {
        assert_eq!(reveal_delay_style(Duration::ZERO), "--reveal-delay: 0ms");

        let stagger = Stagger::new(Duration::from_millis(300));
        assert_eq!(reveal_delay_style(stagger.delay_for(2)), "--reveal-delay: 600ms");
    }
}
