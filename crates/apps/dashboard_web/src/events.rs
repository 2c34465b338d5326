//! Listener wiring. Every handler turns a DOM event into a `UiEvent`.

use dashboard::{DashboardConfig, UiEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

use crate::dispatch;
use crate::dom::{DomPage, FILTER_CONTROL_SELECTOR, NOTIFICATION_ACTION_SELECTOR, NOTIFICATION_ITEM_CLASS};

const RECENT_ITEM_SELECTOR: &str = ".recent-item";
const VIEW_DETAILS_SELECTOR: &str = ".view-details-btn";
const INLINE_HANDLER: &str = "onclick";

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn listen_by_id<F>(page: &DomPage, id: &str, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    match page.element(id) {
        Some(el) => listen(&el, kind, handler),
        None => Ok(()),
    }
}

/// Nearest ancestor-or-self of the event target matching `selector`.
fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(|e| e.key())
}

pub fn wire(page: &DomPage, config: &DashboardConfig) -> Result<(), JsValue> {
    listen_by_id(page, &config.overlay_id, "click", |_| {
        dispatch(UiEvent::OverlayClicked)
    })?;

    listen(page.document(), "keydown", |event| {
        if let Some(key) = key_of(&event) {
            dispatch(UiEvent::KeyDown(key));
        }
    })?;

    listen_by_id(page, &config.search_input_id, "keypress", |event| {
        if let Some(key) = key_of(&event) {
            dispatch(UiEvent::SearchKey(key));
        }
    })?;

    listen_by_id(page, &config.recent_searches_id, "click", |event| {
        if let Some(term) = closest(&event, RECENT_ITEM_SELECTOR).and_then(|el| el.get_attribute("data-term")) {
            dispatch(UiEvent::SelectRecent(term));
        }
    })?;

    listen_by_id(page, &config.search_results_id, "click", |event| {
        if let Some(location) =
            closest(&event, VIEW_DETAILS_SELECTOR).and_then(|el| el.get_attribute("data-location"))
        {
            dispatch(UiEvent::ViewLocationDetails(location));
        }
    })?;

    // Filter and action buttons are delegated from the document so controls
    // outside the list (the panel header) are covered too. Controls with an
    // inline handler call the exported functions themselves.
    listen(page.document(), "click", |event| {
        if let Some(control) = closest(&event, FILTER_CONTROL_SELECTOR) {
            if control.has_attribute(INLINE_HANDLER) || control.id().is_empty() {
                return;
            }
            if let Some(category) = control.get_attribute("data-filter") {
                dispatch(UiEvent::FilterNotifications {
                    category,
                    control_id: control.id(),
                });
            }
            return;
        }
        if let Some(action) = closest(&event, NOTIFICATION_ACTION_SELECTOR)
            && !action.has_attribute(INLINE_HANDLER)
            && let Some(item) = closest(&event, &format!(".{NOTIFICATION_ITEM_CLASS}"))
        {
            dispatch(UiEvent::MarkRead(item.id()));
        }
    })
}
