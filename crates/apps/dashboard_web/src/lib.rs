use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use charts::{ChartId, DashboardCharts};
use dashboard::{Dashboard, DashboardConfig, PanelId, UiEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

mod chartjs;
mod dom;
mod events;
mod store;

use dom::{DomPage, NOTIFICATION_ITEM_CLASS};
use store::WebHistoryStore;

// Guard to prevent double-initialization (hot reload, repeated script tags).
static INITIALIZED: AtomicBool = AtomicBool::new(false);

// Ids handed to filter controls that only show up when first clicked.
static LATE_CONTROLS: AtomicUsize = AtomicUsize::new(0);

/// Body attribute holding an optional JSON `DashboardConfig` override.
const CONFIG_ATTRIBUTE: &str = "data-dashboard-config";

thread_local! {
    static DASHBOARD: RefCell<Option<Dashboard<WebHistoryStore>>> = const { RefCell::new(None) };
}

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn log_error(context: &str, err: &JsValue) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {:?}", err)));
}

/// Runs `f` against the live dashboard. Returns `None` before init, during
/// TLS teardown, or when called re-entrantly.
fn with_dashboard<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Dashboard<WebHistoryStore>) -> R,
{
    DASHBOARD
        .try_with(|cell| {
            let mut slot = cell.try_borrow_mut().ok()?;
            slot.as_mut().map(f)
        })
        .ok()
        .flatten()
}

fn is_initialized() -> bool {
    DASHBOARD
        .try_with(|cell| cell.try_borrow().map(|d| d.is_some()).unwrap_or(true))
        .unwrap_or(false)
}

/// Applies one UI event to the document and echoes stub actions to the console.
pub(crate) fn dispatch(event: UiEvent) {
    let Some(mut page) = DomPage::current() else {
        return;
    };
    let handled = with_dashboard(|dashboard| {
        dashboard.handle(&mut page, event);
        for action in dashboard.actions_mut().drain() {
            log(&action.message());
        }
    });
    if handled.is_none() {
        log("dashboard not initialized");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    console_error_panic_hook::set_once();

    let Some(page) = DomPage::current() else {
        return Ok(());
    };
    if page.document().ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(auto_init);
        page.document()
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        auto_init();
    }
    Ok(())
}

fn auto_init() {
    let config = DomPage::current()
        .and_then(|page| page.document().body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    if let Err(err) = init_dashboard(config) {
        log_error("dashboard init error", &err);
    }
    init_weather_charts();
    init_river_height_chart();
}

/// Builds the dashboard over the current document. Later calls are no-ops.
#[wasm_bindgen]
pub fn init_dashboard(config_json: Option<String>) -> Result<(), JsValue> {
    if is_initialized() {
        return Ok(());
    }
    let config = match config_json.as_deref() {
        Some(raw) => DashboardConfig::from_json(raw).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => DashboardConfig::default(),
    };
    let mut page = DomPage::current().ok_or_else(|| JsValue::from_str("no document"))?;

    let store = WebHistoryStore::new(&config.storage_key);
    if matches!(store, WebHistoryStore::Memory(_)) {
        log("localStorage unavailable; recent searches kept for this page only");
    }
    let (notifications, filter_controls) = page.discover_notifications();
    let mut dashboard = Dashboard::new(config.clone(), store, notifications, filter_controls);
    dashboard.init(&mut page);
    tracing::debug!(
        notifications = dashboard.notifications().items().len(),
        "dashboard initialized"
    );

    DASHBOARD
        .try_with(|cell| cell.try_borrow_mut().map(|mut slot| *slot = Some(dashboard)).is_ok())
        .ok()
        .filter(|stored| *stored)
        .ok_or_else(|| JsValue::from_str("dashboard state unavailable"))?;

    events::wire(&page, &config)
}

#[wasm_bindgen]
pub fn open_panel(name: &str) {
    match PanelId::parse(name) {
        Some(panel) => dispatch(UiEvent::OpenPanel(panel)),
        None => log(&format!("unknown panel: {name}")),
    }
}

#[wasm_bindgen]
pub fn open_search_panel() {
    dispatch(UiEvent::OpenPanel(PanelId::Search));
}

#[wasm_bindgen]
pub fn open_map_panel() {
    dispatch(UiEvent::OpenPanel(PanelId::Map));
}

#[wasm_bindgen]
pub fn open_notification_panel() {
    dispatch(UiEvent::OpenPanel(PanelId::Notification));
}

#[wasm_bindgen]
pub fn close_all_panels() {
    dispatch(UiEvent::CloseAllPanels);
}

#[wasm_bindgen]
pub fn close_search_panel() {
    dispatch(UiEvent::ClosePanel(PanelId::Search));
}

#[wasm_bindgen]
pub fn close_map_panel() {
    dispatch(UiEvent::ClosePanel(PanelId::Map));
}

#[wasm_bindgen]
pub fn close_notification_panel() {
    dispatch(UiEvent::ClosePanel(PanelId::Notification));
}

/// Searches for the search input's current value.
#[wasm_bindgen]
pub fn perform_search() {
    dispatch(UiEvent::SearchInput);
}

#[wasm_bindgen]
pub fn search_for(term: &str) {
    dispatch(UiEvent::SelectRecent(term.to_string()));
}

#[wasm_bindgen]
pub fn filter_notifications(category: &str, control: &Element) {
    let control_id = if control.id().is_empty() {
        let index = LATE_CONTROLS.fetch_add(1, Ordering::SeqCst);
        dom::ensure_id(control, dom::LATE_FILTER_CONTROL_ID_PREFIX, index)
    } else {
        control.id()
    };
    dispatch(UiEvent::FilterNotifications {
        category: category.to_string(),
        control_id,
    });
}

/// `control` is the item's action button or any node inside the item.
#[wasm_bindgen]
pub fn mark_as_read(control: &Element) {
    match control.closest(&format!(".{NOTIFICATION_ITEM_CLASS}")) {
        Ok(Some(item)) if !item.id().is_empty() => dispatch(UiEvent::MarkRead(item.id())),
        _ => log("mark_as_read: control is not inside a notification"),
    }
}

#[wasm_bindgen]
pub fn mark_all_as_read() {
    dispatch(UiEvent::MarkAllRead);
}

#[wasm_bindgen]
pub fn clear_all_notifications() {
    dispatch(UiEvent::ClearNotifications);
}

#[wasm_bindgen]
pub fn view_location_details(location: &str) {
    dispatch(UiEvent::ViewLocationDetails(location.to_string()));
}

#[wasm_bindgen]
pub fn center_map() {
    dispatch(UiEvent::CenterMap);
}

#[wasm_bindgen]
pub fn toggle_layers() {
    dispatch(UiEvent::ToggleLayers);
}

/// Creates the three ambient charts. Returns how many were created.
#[wasm_bindgen]
pub fn init_weather_charts() -> u32 {
    let charts = DashboardCharts::default();
    let mut created = 0;
    for id in ChartId::ALL.into_iter().filter(|id| id.is_ambient()) {
        match chartjs::create(&charts, id) {
            Ok(_) => created += 1,
            Err(err) => log_error(&format!("chart {} not created", id.canvas_id()), &err),
        }
    }
    created
}

#[wasm_bindgen]
pub fn init_river_height_chart() -> bool {
    match chartjs::create(&DashboardCharts::default(), ChartId::RiverHeight) {
        Ok(_) => true,
        Err(err) => {
            log_error("river height chart not created", &err);
            false
        }
    }
}
