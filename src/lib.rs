//! Core of Prompt Amplifier, a menu bar popover utility.
//!
//! Nothing in here talks to a real display. Hosts implement
//! [`PopoverWindow`], [`GeometryProvider`] and [`SaveDialog`], then feed
//! every runtime event through [`AppContext::dispatch`].

pub mod app;
pub mod bridge;
pub mod config;
pub mod error;
pub mod geometry;
pub mod tray;
pub mod window;

#[cfg(test)]
mod testing;

pub use app::{AppContext, HostEvent, QuittingFlag, Reaction};
pub use bridge::{save_prompt, write_prompt, BridgeCommand, SaveDialog, SaveOutcome, SaveResponse};
pub use config::{Config, SaveConfig, TrayConfig, WindowConfig};
pub use error::{Error, Result};
pub use geometry::{place_near_tray, GeometryProvider, Position, Rect, Size, TRAY_GAP};
pub use tray::{MenuAction, MenuEntry, TrayActivation, TrayController, TrayIntent, QUIT_MENU_ID};
pub use window::{CloseDecision, PopoverWindow, Visibility, VisibilityManager};
