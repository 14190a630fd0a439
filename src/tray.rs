use crate::config::TrayConfig;

/// Raw gesture on the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayActivation {
    /// Usually a left click.
    Primary,
    /// Usually a right click.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIntent {
    ToggleWindow,
    ShowMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

pub const QUIT_MENU_ID: &str = "quit";

const MENU: &[MenuEntry] = &[MenuEntry {
    id: QUIT_MENU_ID,
    label: "Quit",
    action: MenuAction::Quit,
}];

pub struct TrayController {
    title: String,
    tooltip: String,
}

impl TrayController {
    pub fn new(config: &TrayConfig) -> Self {
        Self {
            title: config.title.clone(),
            tooltip: config.tooltip.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn menu(&self) -> &'static [MenuEntry] {
        MENU
    }

    pub fn intent_for(&self, activation: TrayActivation) -> TrayIntent {
        match activation {
            TrayActivation::Primary => TrayIntent::ToggleWindow,
            TrayActivation::Secondary => TrayIntent::ShowMenu,
        }
    }

    pub fn menu_action(&self, id: &str) -> Option<MenuAction> {
        self.menu()
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activations_map_to_intents() {
        let tray = TrayController::new(&TrayConfig::default());
        assert_eq!(
            tray.intent_for(TrayActivation::Primary),
            TrayIntent::ToggleWindow
        );
        assert_eq!(
            tray.intent_for(TrayActivation::Secondary),
            TrayIntent::ShowMenu
        );
    }

    #[test]
    fn menu_holds_only_quit() {
        let tray = TrayController::new(&TrayConfig::default());
        assert_eq!(tray.menu().len(), 1);
        assert_eq!(tray.menu()[0].label, "Quit");
        assert_eq!(tray.menu_action(QUIT_MENU_ID), Some(MenuAction::Quit));
        assert_eq!(tray.menu_action("settings"), None);
    }

    #[test]
    fn carries_configured_labels() {
        let config = TrayConfig {
            title: "P".to_string(),
            tooltip: "Prompts".to_string(),
        };
        let tray = TrayController::new(&config);
        assert_eq!(tray.title(), "P");
        assert_eq!(tray.tooltip(), "Prompts");
    }
}
