/// Actions that have no backend yet. They are logged, recorded and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ViewLocationDetails { location: String },
    CenterMap,
    ToggleLayers,
}

impl UiAction {
    pub fn kind(&self) -> &'static str {
        match self {
            UiAction::ViewLocationDetails { .. } => "view_details",
            UiAction::CenterMap => "center_map",
            UiAction::ToggleLayers => "toggle_layers",
        }
    }

    pub fn message(&self) -> String {
        match self {
            UiAction::ViewLocationDetails { location } => {
                format!("Viewing details for: {location}")
            }
            UiAction::CenterMap => "Centering map...".to_string(),
            UiAction::ToggleLayers => "Toggling map layers...".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ActionLog {
    actions: Vec<UiAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: UiAction) {
        tracing::info!(kind = action.kind(), "{}", action.message());
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[UiAction] {
        &self.actions
    }

    pub fn drain(&mut self) -> Vec<UiAction> {
        std::mem::take(&mut self.actions)
    }
}
