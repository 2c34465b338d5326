pub mod actions;
pub mod config;
pub mod markup;
pub mod notifications;
pub mod page;
pub mod panels;
pub mod search;

pub use actions::*;
pub use config::*;
pub use notifications::*;
pub use page::*;
pub use panels::*;
pub use search::*;

use history::HistoryStore;

/// Everything the page can ask the dashboard to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    OpenPanel(PanelId),
    ClosePanel(PanelId),
    CloseAllPanels,
    OverlayClicked,
    /// Key pressed anywhere on the document.
    KeyDown(String),
    /// Key pressed inside the search input.
    SearchKey(String),
    Search(String),
    SearchInput,
    SelectRecent(String),
    FilterNotifications { category: String, control_id: String },
    MarkRead(String),
    MarkAllRead,
    ClearNotifications,
    ViewLocationDetails(String),
    CenterMap,
    ToggleLayers,
}

/// Panels, widgets and the stub-action log of one dashboard page.
#[derive(Debug)]
pub struct Dashboard<S> {
    config: DashboardConfig,
    panels: PanelController,
    search: SearchWidget<S>,
    notifications: NotificationWidget,
    actions: ActionLog,
}

impl<S: HistoryStore> Dashboard<S> {
    pub fn new(
        config: DashboardConfig,
        store: S,
        notifications: Vec<Notification>,
        filter_controls: Vec<String>,
    ) -> Self {
        Self {
            panels: PanelController::new(&config),
            search: SearchWidget::new(store, &config),
            notifications: NotificationWidget::new(&config, notifications, filter_controls),
            actions: ActionLog::new(),
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn panels(&self) -> &PanelController {
        &self.panels
    }

    pub fn search(&self) -> &SearchWidget<S> {
        &self.search
    }

    pub fn notifications(&self) -> &NotificationWidget {
        &self.notifications
    }

    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut ActionLog {
        &mut self.actions
    }

    pub fn init<P: Page>(&mut self, page: &mut P) {
        self.panels.install(page);
        self.search.refresh(page);
        self.notifications.init(page);
    }

    pub fn handle<P: Page>(&mut self, page: &mut P, event: UiEvent) {
        match event {
            UiEvent::OpenPanel(panel) => {
                if self.panels.open(page, panel).is_open(panel) {
                    self.on_panel_opened(page, panel);
                }
            }
            UiEvent::ClosePanel(panel) => {
                self.panels.close(page, panel);
            }
            UiEvent::CloseAllPanels => {
                self.panels.close_all(page);
            }
            UiEvent::OverlayClicked => {
                self.panels.dismiss(page, Dismissal::OverlayClick);
            }
            UiEvent::KeyDown(key) => {
                self.panels.handle_key(page, &key);
            }
            UiEvent::SearchKey(key) => {
                self.search.handle_key(page, &key);
            }
            UiEvent::Search(term) => {
                self.search.submit(page, &term);
            }
            UiEvent::SearchInput => {
                self.search.submit_input(page);
            }
            UiEvent::SelectRecent(term) => {
                self.search.select_recent(page, &term);
            }
            UiEvent::FilterNotifications {
                category,
                control_id,
            } => self.notifications.filter(page, &category, &control_id),
            UiEvent::MarkRead(element_id) => {
                self.notifications.mark_read(page, &element_id);
            }
            UiEvent::MarkAllRead => self.notifications.mark_all_read(page),
            UiEvent::ClearNotifications => self.notifications.clear_all(page),
            UiEvent::ViewLocationDetails(location) => {
                self.actions.record(UiAction::ViewLocationDetails { location });
            }
            UiEvent::CenterMap => self.actions.record(UiAction::CenterMap),
            UiEvent::ToggleLayers => self.actions.record(UiAction::ToggleLayers),
        }
    }

    fn on_panel_opened<P: Page>(&mut self, page: &mut P, panel: PanelId) {
        match panel {
            PanelId::Search => self.search.refresh(page),
            PanelId::Notification => {
                self.notifications.render_count(page);
            }
            PanelId::Map => {}
        }
    }
}
