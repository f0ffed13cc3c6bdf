//! Intro page
//!
//! Pressing the `.face` element plays its CSS transition, then the page
//! navigates to the demo.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use super::input::pointer_kind;

const FACE_SELECTOR: &str = ".face";
const TRANSITION_CLASS: &str = "face-transition";
const DEMO_PAGE: &str = "index.html";

/// Wire up the intro if this page has a face. Returns false when it doesn't.
pub fn install(document: &Document) -> Result<bool, JsValue> {
    let Some(face) = document.query_selector(FACE_SELECTOR)? else {
        return Ok(false);
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let kind = pointer_kind(&window);

    // Only navigate for transitions we started
    let armed = Rc::new(Cell::new(false));

    {
        let face_clone = face.clone();
        let armed = armed.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            if face_clone.class_list().add_1(TRANSITION_CLASS).is_ok() {
                armed.set(true);
            }
        });
        face.add_event_listener_with_callback(kind.press_event(), closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let face_clone = face.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            let face_js: &JsValue = face_clone.as_ref();
            let is_face = event.target().map(JsValue::from).as_ref() == Some(face_js);
            if !is_face || !armed.get() {
                return;
            }
            armed.set(false);
            let _ = face_clone.class_list().remove_1(TRANSITION_CLASS);

            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(DEMO_PAGE) {
                    log::error!("Navigation to {} failed: {:?}", DEMO_PAGE, e);
                }
            }
        });
        face.add_event_listener_with_callback("transitionend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    log::info!("Intro ready ({})", kind.press_event());
    Ok(true)
}
