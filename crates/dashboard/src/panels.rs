use crate::config::DashboardConfig;
use crate::page::Page;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PanelId {
    Search,
    Map,
    Notification,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [PanelId::Search, PanelId::Map, PanelId::Notification];

    /// Accepts the short name (`"map"`) or the stock element id (`"map-panel"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" | "search-panel" => Some(PanelId::Search),
            "map" | "map-panel" => Some(PanelId::Map),
            "notification" | "notifications" | "notification-panel" => {
                Some(PanelId::Notification)
            }
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PanelId::Search => "search",
            PanelId::Map => "map",
            PanelId::Notification => "notification",
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open(PanelId),
}

impl PanelState {
    pub fn current(self) -> Option<PanelId> {
        match self {
            PanelState::Closed => None,
            PanelState::Open(p) => Some(p),
        }
    }

    pub fn is_open(self, panel: PanelId) -> bool {
        self == PanelState::Open(panel)
    }
}

/// What dismissed the open panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dismissal {
    OverlayClick,
    EscapeKey,
}

impl Dismissal {
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(Dismissal::EscapeKey)
    }
}

/// Keeps at most one panel open and the dimming overlay in step with it.
#[derive(Debug, Clone)]
pub struct PanelController {
    state: PanelState,
    panel_ids: [String; 3],
    overlay_id: String,
    overlay_class: String,
    active_class: String,
}

impl PanelController {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            state: PanelState::Closed,
            panel_ids: PanelId::ALL.map(|p| config.panel_element_id(p).to_string()),
            overlay_id: config.overlay_id.clone(),
            overlay_class: config.overlay_class.clone(),
            active_class: config.active_class.clone(),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn current(&self) -> Option<PanelId> {
        self.state.current()
    }

    pub fn overlay_id(&self) -> &str {
        &self.overlay_id
    }

    pub fn element_id(&self, panel: PanelId) -> &str {
        &self.panel_ids[panel as usize]
    }

    /// Adds the overlay element when the markup does not provide one.
    pub fn install<P: Page>(&self, page: &mut P) {
        if page.ensure_element(&self.overlay_id, &self.overlay_class) {
            tracing::debug!(overlay = %self.overlay_id, "panel overlay created");
        }
    }

    /// Closes everything, then opens `panel` with the overlay.
    ///
    /// The panel stays closed when either its element or the overlay is
    /// missing from the page.
    pub fn open<P: Page>(&mut self, page: &mut P, panel: PanelId) -> PanelState {
        self.close_all(page);

        let id = &self.panel_ids[panel as usize];
        if !page.has_element(id) || !page.has_element(&self.overlay_id) {
            tracing::debug!(panel = panel.name(), "panel or overlay missing, not opening");
            return self.state;
        }

        page.add_class(id, &self.active_class);
        page.add_class(&self.overlay_id, &self.active_class);
        page.set_scroll_locked(true);
        self.state = PanelState::Open(panel);
        tracing::debug!(panel = panel.name(), "panel opened");
        self.state
    }

    /// Deactivates `panel` and releases the overlay, the scroll lock and the
    /// current-panel record, whichever panel was recorded as open.
    pub fn close<P: Page>(&mut self, page: &mut P, panel: PanelId) -> PanelState {
        page.remove_class(&self.panel_ids[panel as usize], &self.active_class);
        self.release(page)
    }

    pub fn close_all<P: Page>(&mut self, page: &mut P) -> PanelState {
        for id in &self.panel_ids {
            page.remove_class(id, &self.active_class);
        }
        self.release(page)
    }

    pub fn dismiss<P: Page>(&mut self, page: &mut P, dismissal: Dismissal) -> PanelState {
        tracing::debug!(?dismissal, "panels dismissed");
        self.close_all(page)
    }

    /// Routes a document-level key press. Returns `true` when it dismissed
    /// the panels.
    pub fn handle_key<P: Page>(&mut self, page: &mut P, key: &str) -> bool {
        let Some(dismissal) = Dismissal::from_key(key) else {
            return false;
        };
        self.dismiss(page, dismissal);
        true
    }

    fn release<P: Page>(&mut self, page: &mut P) -> PanelState {
        page.remove_class(&self.overlay_id, &self.active_class);
        page.set_scroll_locked(false);
        self.state = PanelState::Closed;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HeadlessPage;

    const IDS: [&str; 4] = ["search-panel", "map-panel", "notification-panel", "panel-overlay"];

    fn setup() -> (PanelController, HeadlessPage) {
        let ctl = PanelController::new(&DashboardConfig::default());
        let page = HeadlessPage::with_elements(IDS);
        (ctl, page)
    }

    fn active_panels(page: &HeadlessPage) -> Vec<&'static str> {
        IDS[..3]
            .iter()
            .copied()
            .filter(|id| page.has_class(id, "active"))
            .collect()
    }

    #[test]
    fn opening_another_panel_closes_the_first() {
        let (mut ctl, mut page) = setup();
        ctl.open(&mut page, PanelId::Search);
        let state = ctl.open(&mut page, PanelId::Map);
        assert_eq!(state, PanelState::Open(PanelId::Map));
        assert_eq!(active_panels(&page), vec!["map-panel"]);
        assert!(page.has_class("panel-overlay", "active"));
        assert!(page.scroll_locked());
    }

    #[test]
    fn open_is_idempotent() {
        let (mut ctl, mut page) = setup();
        ctl.open(&mut page, PanelId::Notification);
        ctl.open(&mut page, PanelId::Notification);
        assert_eq!(ctl.current(), Some(PanelId::Notification));
        assert_eq!(active_panels(&page), vec!["notification-panel"]);
    }

    #[test]
    fn close_all_releases_everything() {
        let (mut ctl, mut page) = setup();
        for p in [PanelId::Map, PanelId::Search, PanelId::Notification] {
            ctl.open(&mut page, p);
        }
        assert_eq!(ctl.close_all(&mut page), PanelState::Closed);
        assert!(active_panels(&page).is_empty());
        assert!(!page.has_class("panel-overlay", "active"));
        assert!(!page.scroll_locked());
    }

    #[test]
    fn escape_and_overlay_click_dismiss() {
        let (mut ctl, mut page) = setup();
        ctl.open(&mut page, PanelId::Search);
        assert!(!ctl.handle_key(&mut page, "Enter"));
        assert!(ctl.state().is_open(PanelId::Search));
        assert!(ctl.handle_key(&mut page, "Escape"));
        assert_eq!(ctl.state(), PanelState::Closed);

        ctl.open(&mut page, PanelId::Map);
        ctl.dismiss(&mut page, Dismissal::OverlayClick);
        assert!(active_panels(&page).is_empty());
    }

    #[test]
    fn missing_panel_is_a_silent_no_op() {
        let (mut ctl, mut page) = setup();
        page.remove("map-panel");
        assert_eq!(ctl.open(&mut page, PanelId::Map), PanelState::Closed);
        assert!(!page.has_class("panel-overlay", "active"));
        assert!(!page.scroll_locked());
        // Other panels still work and closing tolerates the gap.
        ctl.open(&mut page, PanelId::Search);
        assert_eq!(ctl.close_all(&mut page), PanelState::Closed);
    }

    #[test]
    fn missing_overlay_keeps_panels_closed() {
        let (mut ctl, mut page) = setup();
        page.remove("panel-overlay");
        assert_eq!(ctl.open(&mut page, PanelId::Search), PanelState::Closed);
        assert!(active_panels(&page).is_empty());
    }

    #[test]
    fn install_creates_overlay_once() {
        let ctl = PanelController::new(&DashboardConfig::default());
        let mut page = HeadlessPage::with_elements(["search-panel"]);
        ctl.install(&mut page);
        assert!(page.has_class("panel-overlay", "modal-panel-overlay"));
        ctl.install(&mut page);
        assert!(page.has_element("panel-overlay"));
    }

    #[test]
    fn closing_any_panel_releases_overlay_and_record() {
        let (mut ctl, mut page) = setup();
        ctl.open(&mut page, PanelId::Map);
        assert_eq!(ctl.close(&mut page, PanelId::Search), PanelState::Closed);
        assert!(!page.has_class("panel-overlay", "active"));
        assert!(!page.scroll_locked());
        assert_eq!(ctl.current(), None);
        // Only the named panel is deactivated.
        assert_eq!(active_panels(&page), vec!["map-panel"]);

        ctl.open(&mut page, PanelId::Search);
        assert_eq!(ctl.close(&mut page, PanelId::Search), PanelState::Closed);
        assert!(active_panels(&page).is_empty());
        assert!(!page.has_class("panel-overlay", "active"));
    }

    #[test]
    fn parses_short_and_element_names() {
        assert_eq!(PanelId::parse("map"), Some(PanelId::Map));
        assert_eq!(PanelId::parse("notification-panel"), Some(PanelId::Notification));
        assert_eq!(PanelId::parse("weather"), None);
    }
}
