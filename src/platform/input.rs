//! Pointer input

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Event, MouseEvent, TouchEvent, Window};

use super::PointerKind;

/// Touch if the browser exposes `ontouchstart`
pub fn pointer_kind(window: &Window) -> PointerKind {
    let has_touch = js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart"))
        .unwrap_or(false);
    PointerKind::detect(has_touch)
}

/// Press position relative to `target`'s top-left corner
pub fn press_position(event: &Event, kind: PointerKind, target: &Element) -> Option<Vec2> {
    let rect = target.get_bounding_client_rect();
    let origin = Vec2::new(rect.left() as f32, rect.top() as f32);

    let client = match kind {
        PointerKind::Touch => {
            let touch = event
                .unchecked_ref::<TouchEvent>()
                .changed_touches()
                .get(0)?;
            Vec2::new(touch.client_x() as f32, touch.client_y() as f32)
        }
        PointerKind::Mouse => {
            let mouse = event.unchecked_ref::<MouseEvent>();
            Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32)
        }
    };
    Some(client - origin)
}

/// Call `handler` with the element-relative position of every press on `target`
pub fn on_press<F>(target: &Element, kind: PointerKind, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Vec2) + 'static,
{
    let target_clone = target.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
        if let Some(pos) = press_position(&event, kind, &target_clone) {
            handler(pos);
        }
    });
    target.add_event_listener_with_callback(kind.press_event(), closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Stop iOS from scrolling the page while bodies are being tapped
pub fn prevent_touch_scroll(window: &Window) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
        event.prevent_default();
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
