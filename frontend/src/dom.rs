//! Browser-backed implementations of the capabilities the pages depend on.

use log::warn;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlScriptElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::navigation::Viewport;
use crate::reveal::VisibilityWatcher;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    fn js(context: &'static str, value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        DomError::Js { context, message }
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// High resolution timestamp in ms, 0 when no clock is available.
pub fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

/// Jumps to the top without animation, used when a page mounts.
pub fn reset_scroll() {
    match window() {
        Ok(window) => window.scroll_to_with_x_and_y(0.0, 0.0),
        Err(err) => warn!("cannot reset scroll position: {}", err),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        match window() {
            Ok(window) => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            Err(err) => warn!("cannot scroll to top: {}", err),
        }
    }

    fn scroll_to_anchor(&self, id: &str) -> bool {
        let Some(element) = document().ok().and_then(|doc| doc.get_element_by_id(id)) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Watches elements with an `IntersectionObserver`.
#[derive(Clone, Copy, Debug)]
pub struct IntersectionWatcher {
    root_margin: &'static str,
}

impl Default for IntersectionWatcher {
    fn default() -> Self {
        // Blocks count as entered once they are 50px inside the bottom edge.
        Self {
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// Keeps the observer and its JS callback alive; disconnects on drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    type Target = Element;
    type Handle = ObserverHandle;
    type Error = DomError;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        on_enter: Box<dyn FnOnce()>,
    ) -> Result<ObserverHandle, DomError> {
        let mut on_enter = Some(on_enter);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if entered {
                    observer.disconnect();
                    if let Some(on_enter) = on_enter.take() {
                        on_enter();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(self.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| DomError::js("creating IntersectionObserver", err))?;
        observer.observe(target);

        Ok(ObserverHandle {
            observer,
            _callback: callback,
        })
    }
}

/// A `<script>` appended to the body; removed again on drop.
pub struct InjectedScript {
    element: HtmlScriptElement,
    _on_error: Closure<dyn FnMut()>,
}

impl Drop for InjectedScript {
    fn drop(&mut self) {
        self.element.remove();
    }
}

pub fn inject_script(src: &str) -> Result<InjectedScript, DomError> {
    let document = document()?;
    let body = document.body().ok_or(DomError::NoBody)?;
    let element: HtmlScriptElement = document
        .create_element("script")
        .map_err(|err| DomError::js("creating script element", err))?
        .unchecked_into();
    element.set_src(src);
    element.set_async(true);

    let url = src.to_string();
    let on_error = Closure::<dyn FnMut()>::new(move || {
        warn!("embed script {} failed to load, leaving placeholder empty", url);
    });
    element.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    body.append_child(&element)
        .map_err(|err| DomError::js("appending script element", err))?;

    Ok(InjectedScript {
        element,
        _on_error: on_error,
    })
}
