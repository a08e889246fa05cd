use tracing::error;

pub const PANEL_ID: &str = "goalsModal";
pub const OPEN_TRIGGER_ID: &str = "openGoalsModal";
pub const CLOSE_TRIGGER_ID: &str = "closeGoalsModal";

/// Anything that can answer whether an element with a given id exists.
pub trait Document {
    fn has_element(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    OpenClicked,
    CloseClicked,
    WindowClicked { target: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Panel became visible; the caller must run the daily check.
    Opened,
    Closed,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct GoalsPanel {
    visible: bool,
}

impl GoalsPanel {
    /// Returns `None` (and logs) when the document lacks the panel structure.
    pub fn wire(document: &dyn Document) -> Option<Self> {
        let missing: Vec<&str> = [PANEL_ID, OPEN_TRIGGER_ID, CLOSE_TRIGGER_ID]
            .into_iter()
            .filter(|id| !document.has_element(id))
            .collect();

        if !missing.is_empty() {
            error!(
                ?missing,
                "goals panel elements not found in the page, daily goals are disabled"
            );
            return None;
        }

        Some(Self::default())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn handle(&mut self, event: &PanelEvent) -> PanelAction {
        match event {
            PanelEvent::OpenClicked => {
                self.visible = true;
                PanelAction::Opened
            }
            PanelEvent::CloseClicked => {
                self.visible = false;
                PanelAction::Closed
            }
            PanelEvent::WindowClicked { target } if target == PANEL_ID => {
                self.visible = false;
                PanelAction::Closed
            }
            PanelEvent::WindowClicked { .. } => PanelAction::Ignored,
        }
    }
}
