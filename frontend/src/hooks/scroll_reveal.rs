use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList};
use yew::prelude::*;

use crate::config::REVEALED_CLASS;

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches a set of elements and adds [`REVEALED_CLASS`] to each one the
/// first time it crosses `threshold`. Revealed elements are unobserved, so
/// nothing is ever hidden again. Dropping disconnects the observer.
pub struct RevealObserver {
    inner: Option<(IntersectionObserver, RevealCallback)>,
}

impl RevealObserver {
    pub fn attach(selector: &str, threshold: f64) -> Self {
        let targets = match query_all(selector) {
            Some(targets) => targets,
            None => return Self { inner: None },
        };

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        reveal(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                for_each_element(&targets, |el| observer.observe(el));
                debug!("Observing {} elements matching {:?}", targets.length(), selector);
                Self {
                    inner: Some((observer, callback)),
                }
            }
            Err(err) => {
                // No observer support: show everything rather than leave it hidden.
                warn!("IntersectionObserver unavailable ({:?}), revealing {:?} now", err, selector);
                for_each_element(&targets, reveal);
                Self { inner: None }
            }
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        if let Some((observer, _callback)) = self.inner.take() {
            observer.disconnect();
        }
    }
}

fn query_all(selector: &str) -> Option<NodeList> {
    let document = web_sys::window().and_then(|w| w.document());
    match document.map(|d| d.query_selector_all(selector)) {
        Some(Ok(targets)) => Some(targets),
        Some(Err(err)) => {
            warn!("Bad reveal selector {:?}: {:?}", selector, err);
            None
        }
        None => {
            warn!("No document, skipping scroll reveal");
            None
        }
    }
}

fn for_each_element(nodes: &NodeList, mut f: impl FnMut(&Element)) {
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            f(&el);
        }
    }
}

fn reveal(el: &Element) {
    if let Err(err) = el.class_list().add_1(REVEALED_CLASS) {
        warn!("Could not reveal element: {:?}", err);
    }
}

/// Attaches a [`RevealObserver`] after the first render of the calling
/// component and tears it down on unmount.
#[hook]
pub fn use_scroll_reveal(selector: &'static str, threshold: f64) {
    use_effect_with_deps(
        move |_| {
            let observer = RevealObserver::attach(selector, threshold);
            move || drop(observer)
        },
        (),
    );
}
