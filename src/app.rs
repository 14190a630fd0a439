//! Application context and the single event entry point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::bridge::{BridgeCommand, SaveOutcome};
use crate::config::Config;
use crate::error::Result;
use crate::geometry::GeometryProvider;
use crate::tray::{MenuAction, TrayActivation, TrayController, TrayIntent};
use crate::window::{CloseDecision, PopoverWindow, Visibility, VisibilityManager};

/// Set once when the process starts shutting down. Never lowered.
#[derive(Debug, Clone, Default)]
pub struct QuittingFlag(Arc<AtomicBool>);

impl QuittingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this call flipped the flag.
    pub fn raise(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Events the host runtime delivers, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Ready,
    SecondInstance,
    WindowAllClosed,
    BeforeQuit,
    Blur,
    CloseRequested,
    Tray(TrayActivation),
    MenuItem(String),
    Bridge(BridgeCommand),
}

/// What the host has to do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    None,
    ShowMenu,
    PreventClose,
    AllowClose,
    PreventExit,
    Exit,
    /// Run [`crate::bridge::save_prompt`] with the host's dialog.
    PromptSave { content: String },
}

impl Reaction {
    /// Content to save, or the answer to send back when no save was asked for.
    pub fn into_save_request(self) -> std::result::Result<String, SaveOutcome> {
        match self {
            Reaction::PromptSave { content } => Ok(content),
            other => Err(SaveOutcome::Failed(format!(
                "save-prompt was not accepted ({:?})",
                other
            ))),
        }
    }
}

pub struct AppContext<W, G> {
    config: Config,
    windows: VisibilityManager<W>,
    tray: TrayController,
    geometry: G,
    quitting: QuittingFlag,
}

impl<W: PopoverWindow, G: GeometryProvider> AppContext<W, G> {
    pub fn new(config: Config, window: W, geometry: G) -> Self {
        let windows = VisibilityManager::new(window)
            .with_gap(config.window.gap)
            .with_hide_on_blur(config.window.hide_on_blur);
        let tray = TrayController::new(&config.tray);

        Self {
            config,
            windows,
            tray,
            geometry,
            quitting: QuittingFlag::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tray(&self) -> &TrayController {
        &self.tray
    }

    pub fn visibility(&self) -> Visibility {
        self.windows.state()
    }

    pub fn window(&self) -> &W {
        self.windows.window()
    }

    pub fn quitting(&self) -> &QuittingFlag {
        &self.quitting
    }

    pub fn dispatch(&mut self, event: HostEvent) -> Result<Reaction> {
        debug!(?event, "dispatching host event");

        match event {
            HostEvent::Ready => {
                info!("ready, window starts hidden");
                Ok(Reaction::None)
            }
            HostEvent::SecondInstance => {
                info!("second instance launched, surfacing window");
                self.windows.on_external_show()?;
                Ok(Reaction::None)
            }
            HostEvent::WindowAllClosed => Ok(Reaction::PreventExit),
            HostEvent::BeforeQuit => {
                // the host is already shutting down, only record it
                if self.quitting.raise() {
                    info!("host is quitting");
                }
                Ok(Reaction::None)
            }
            HostEvent::Blur => {
                self.windows.on_blur()?;
                Ok(Reaction::None)
            }
            HostEvent::CloseRequested => {
                match self.windows.on_close_requested(self.quitting.is_set())? {
                    CloseDecision::Prevent => Ok(Reaction::PreventClose),
                    CloseDecision::Allow => Ok(Reaction::AllowClose),
                }
            }
            HostEvent::Tray(activation) => match self.tray.intent_for(activation) {
                TrayIntent::ToggleWindow => {
                    self.windows.toggle(&self.geometry)?;
                    Ok(Reaction::None)
                }
                TrayIntent::ShowMenu => Ok(Reaction::ShowMenu),
            },
            HostEvent::MenuItem(id) => match self.tray.menu_action(&id) {
                Some(MenuAction::Quit) => Ok(self.quit("tray menu")),
                None => {
                    debug!("ignoring unknown menu item {:?}", id);
                    Ok(Reaction::None)
                }
            },
            HostEvent::Bridge(command) => self.bridge(command),
        }
    }

    fn bridge(&mut self, command: BridgeCommand) -> Result<Reaction> {
        debug!("bridge command {}", command.name());
        match command {
            BridgeCommand::HideWindow => {
                self.windows.hide()?;
                Ok(Reaction::None)
            }
            BridgeCommand::QuitApp => Ok(self.quit("ui")),
            BridgeCommand::SavePrompt { content } => Ok(Reaction::PromptSave { content }),
        }
    }

    fn quit(&self, source: &str) -> Reaction {
        if self.quitting.raise() {
            info!("quit requested from {}", source);
        }
        Reaction::Exit
    }
}
